//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Key and address sizes
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 65;
pub const ADDRESS_SIZE: usize = 21;
pub const ADDRESS_PREFIX: u8 = 0x41;
pub const ADDRESS_CHECKSUM_SIZE: usize = 4;
pub const HASH_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 65;

// BIP-39 / BIP-44
pub const MNEMONIC_ENTROPY_SIZE: usize = 16; // 128 bits, 12 words
pub const DEFAULT_MNEMONIC_WORDS: usize = 12;
pub const SUPPORTED_MNEMONIC_WORDS: &[usize] = &[12, 15, 18, 21, 24];
pub const TRON_COIN_TYPE: u32 = 195;
pub const TRON_DERIVATION_PATH: &str = "m/44'/195'/0'/0/0";

// Encryption constants
pub const KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;
pub const SALT_SIZE: usize = 16;
pub const ENVELOPE_VERSION: u8 = 1;

// Password constants
pub const PASSWORD_MIN_LENGTH: usize = 8;

// Argon2id defaults (OWASP minimum profile)
pub const ARGON2_MEMORY_COST_KIB: u32 = 19_456;
pub const ARGON2_ITERATIONS: u32 = 2;
pub const ARGON2_PARALLELISM: u32 = 1;
pub const PBKDF2_ITERATIONS: u32 = 600_000;

// Token and transfer constants
pub const TRX_SYMBOL: &str = "TRX";
pub const TRX_DECIMALS: u8 = 6;
pub const DEFAULT_TOKEN_SYMBOL: &str = "USDT";
pub const TRC20_FEE_LIMIT_SUN: u64 = 100_000_000; // 100 TRX
pub const TRC20_TRANSFER_SELECTOR: &str = "transfer(address,uint256)";
pub const TRC20_BALANCE_OF_SELECTOR: &str = "balanceOf(address)";
pub const TRC20_DECIMALS_SELECTOR: &str = "decimals()";
pub const TRANSFER_CONTRACT_TYPE: &str = "TransferContract";
pub const CONTRACT_RET_SUCCESS: &str = "SUCCESS";

// Network defaults
pub const DEFAULT_HISTORY_LIMIT: usize = 20;
pub const MAX_HISTORY_LIMIT: usize = 200;
pub const API_KEY_HEADER: &str = "TRON-PRO-API-KEY";

pub const NILE_FULL_HOST: &str = "https://nile.trongrid.io";
pub const NILE_EXPLORER: &str = "https://nile.tronscan.org";
pub const NILE_FAUCET: &str = "https://nileex.io/join/getJoinPage";
pub const NILE_USDT_CONTRACT: &str = "TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf";

pub const SHASTA_FULL_HOST: &str = "https://api.shasta.trongrid.io";
pub const SHASTA_EXPLORER: &str = "https://shasta.tronscan.org";
pub const SHASTA_FAUCET: &str = "https://www.trongrid.io/shasta";

pub const MAINNET_FULL_HOST: &str = "https://api.trongrid.io";
pub const MAINNET_EXPLORER: &str = "https://tronscan.org";
pub const MAINNET_USDT_CONTRACT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

/// Fixed user-facing messages.
pub mod messages {
    pub const MNEMONIC_GENERATION_FAILED: &str = "Failed to generate mnemonic. Please try again.";
    pub const SELECT_ALL_WORDS: &str = "Please select all words in the correct order";
    pub const WRONG_WORD_ORDER: &str = "The order of words is incorrect. Please try again.";

    pub const WEAK_PASSWORD: &str = "Please create a stronger password";
    pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
    pub const ENCRYPTION_FAILED: &str = "Failed to encrypt mnemonic. Please try again.";
    pub const DECRYPTION_FAILED: &str = "Failed to decrypt mnemonic";

    pub const CLIENT_INIT_FAILED: &str = "Failed to initialize Tron client";
    pub const WALLET_CREATION_FAILED: &str = "Failed to create wallet";
    pub const BALANCE_FETCH_FAILED: &str = "Failed to fetch balances";
    pub const HISTORY_FETCH_FAILED: &str = "Failed to fetch transactions";

    pub const EMPTY_RECIPIENT: &str = "Please add receiver address";
    pub const INVALID_ADDRESS: &str = "Invalid address";
    pub const SEND_TO_SELF: &str = "You cannot send to self";
    pub const INVALID_AMOUNT: &str = "Please enter a valid amount";
    pub const AMOUNT_NOT_POSITIVE: &str = "Amount cannot be zero or less";
    pub const TOO_MANY_DECIMALS: &str = "Amount has too many decimal places";
    pub const BROADCAST_FAILED: &str = "Failed to broadcast transaction";

    pub const NETWORK_FAILURE: &str = "Network request failed. Please try again.";
    pub const UNEXPECTED_FAILURE: &str = "Something went wrong. Please try again.";
}
