//! BIP-39 mnemonic generation and validation

use bip39::{Language, Mnemonic};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

use super::SecureSeedPhrase;
use crate::shared::constants::{messages, DEFAULT_MNEMONIC_WORDS, SUPPORTED_MNEMONIC_WORDS};
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Generate a 12-word English mnemonic from 128 bits of OS entropy
pub fn generate_mnemonic() -> WalletResult<SecureSeedPhrase> {
    generate_mnemonic_with_words(DEFAULT_MNEMONIC_WORDS)
}

/// Generate a mnemonic of 12, 15, 18, 21 or 24 words
pub fn generate_mnemonic_with_words(word_count: usize) -> WalletResult<SecureSeedPhrase> {
    if !SUPPORTED_MNEMONIC_WORDS.contains(&word_count) {
        return Err(WalletError::validation(format!(
            "Unsupported mnemonic length: {} words",
            word_count
        )));
    }

    // 32 bits of entropy per 3 words
    let mut entropy = Zeroizing::new(vec![0u8; word_count / 3 * 4]);
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| {
            log::error!("OS entropy source failed: {}", e);
            WalletError::crypto(messages::MNEMONIC_GENERATION_FAILED)
        })?;

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy).map_err(|e| {
        log::error!("Mnemonic encoding failed: {}", e);
        WalletError::crypto(messages::MNEMONIC_GENERATION_FAILED)
    })?;

    log::debug!("Generated {}-word mnemonic", word_count);
    Ok(SecureSeedPhrase::new(mnemonic.to_string()))
}

/// Parse user input into a checksummed English mnemonic
pub fn parse_mnemonic(phrase: &str) -> WalletResult<SecureSeedPhrase> {
    let normalized = SecureSeedPhrase::new(phrase.to_lowercase());
    Mnemonic::parse_in_normalized(Language::English, normalized.as_str())?;
    Ok(normalized)
}

/// Validate seed phrase
pub fn validate_mnemonic(phrase: &str) -> WalletResult<()> {
    parse_mnemonic(phrase).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_default_mnemonic() {
        let mnemonic = generate_mnemonic().expect("Failed to generate mnemonic");
        assert_eq!(mnemonic.word_count(), 12);
        assert!(validate_mnemonic(mnemonic.as_str()).is_ok());
    }

    #[test]
    fn test_generate_all_supported_lengths() {
        for &words in SUPPORTED_MNEMONIC_WORDS {
            let mnemonic = generate_mnemonic_with_words(words).expect("Failed to generate mnemonic");
            assert_eq!(mnemonic.word_count(), words);
        }
        assert!(generate_mnemonic_with_words(13).is_err());
    }

    #[test]
    fn test_mnemonics_are_unique() {
        let phrases: HashSet<String> = (0..16)
            .map(|_| generate_mnemonic().expect("generate").as_str().to_string())
            .collect();
        assert_eq!(phrases.len(), 16);
    }

    #[test]
    fn test_validate_mnemonic() {
        let known_valid_12 = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        assert!(validate_mnemonic(known_valid_12).is_ok());
        assert!(validate_mnemonic(&known_valid_12.to_uppercase()).is_ok());

        // Bad checksum
        assert!(validate_mnemonic("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon").is_err());
        // Unknown word
        assert!(validate_mnemonic("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon tronx").is_err());
        // Too short
        assert!(validate_mnemonic("abandon ability able about above absent absorb abstract absurd abuse access").is_err());
    }
}
