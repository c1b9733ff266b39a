//! Tron wallet CLI
//!
//! Interactive setup wizard followed by a small wallet menu.

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

use tron_wallet_core::core::crypto::password::PasswordChecks;
use tron_wallet_core::domain::entities::TransferDirection;
use tron_wallet_core::shared::constants::DEFAULT_MNEMONIC_WORDS;
use tron_wallet_core::{init_wallet_core, SetupWizard, TransferReceipt, WalletConfig, WalletResult, WalletSession};

#[derive(Parser)]
#[command(name = "tron-wallet")]
#[command(about = "Create a Tron wallet and send TRX or TRC20 tokens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the setup wizard, then open the wallet menu
    Setup {
        /// Mnemonic length (12, 15, 18, 21 or 24)
        #[arg(long, default_value_t = DEFAULT_MNEMONIC_WORDS)]
        words: usize,
    },

    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tron_wallet_core::init();

    match cli.command {
        Commands::Setup { words } => setup(words).await,
        Commands::Config => {
            print_config(&WalletConfig::from_env()?);
            Ok(())
        }
    }
}

fn print_config(config: &WalletConfig) {
    println!("Tron Wallet Configuration:\n");
    println!("  Network: {}", config.network);
    println!("  Full host: {}", config.full_host);
    println!("  API key: {}", if config.api_key.is_some() { "(set)" } else { "(not set)" });
    match &config.token {
        Some(token) => println!("  Token: {} at {}", token.symbol, token.contract),
        None => println!("  Token: (none)"),
    }
    println!("  History limit: {}", config.history_limit);
    match config.request_timeout {
        Some(timeout) => println!("  Request timeout: {}s", timeout.as_secs()),
        None => println!("  Request timeout: (client default)"),
    }
    println!("  Password KDF: {}", config.password.algorithm);
    println!("  Cipher: {}", config.cipher);
    println!("  Explorer: {}", config.network.block_explorer());
    if let Some(faucet) = config.network.faucet_url() {
        println!("  Faucet: {}", faucet);
    }
}

async fn setup(words: usize) -> Result<()> {
    let core = init_wallet_core()?;
    let mut wizard = core.wizard().with_word_count(words);

    record_mnemonic(&mut wizard)?;
    verify_mnemonic(&mut wizard)?;
    let password = choose_password(&mut wizard)?;

    let session = wizard
        .create_session(&password, core.client.clone(), &core.config)
        .map_err(|e| anyhow!(e.user_message()))?;
    drop(password);

    print_success("Wallet created");
    println!("Address: {}", session.wallet().address_base58());
    println!("Hex:     {}", session.wallet().address_hex());
    println!("Explorer: {}", session.explorer_url());
    if let Some(faucet) = session.faucet_url() {
        println!("Fund it with test TRX at {}", faucet);
    }

    menu(&wizard, session).await
}

/// Show mnemonics until the user accepts one
fn record_mnemonic(wizard: &mut SetupWizard) -> Result<()> {
    loop {
        let mnemonic = wizard.generate().map_err(|e| anyhow!(e.user_message()))?;
        println!();
        println!("Your recovery phrase. Write these words down in order:");
        println!();
        for (i, word) in mnemonic.words().iter().enumerate() {
            print!("{:>2}. {:<12}", i + 1, word);
            if (i + 1) % 4 == 0 {
                println!();
            }
        }
        println!();

        match prompt("[c]ontinue or [r]egenerate: ")?.as_str() {
            "r" | "regenerate" => continue,
            "c" | "continue" => return Ok(()),
            _ => print_warning("Please answer c or r"),
        }
    }
}

/// Quiz loop; retried until the order is right
fn verify_mnemonic(wizard: &mut SetupWizard) -> Result<()> {
    wizard.confirm_recorded().map_err(|e| anyhow!(e.user_message()))?;
    loop {
        let quiz = wizard.quiz().ok_or_else(|| anyhow!("Quiz not started"))?;
        println!();
        println!("Select the words in their original order:");
        for (i, word) in quiz.shuffled_words().iter().enumerate() {
            let marker = if quiz.is_used(i) { "*" } else { " " };
            println!("  {:>2}{} {}", i + 1, marker, word);
        }
        if !quiz.selected_words().is_empty() {
            println!("Selected: {}", quiz.selected_words().join(" "));
        }

        let input = prompt("Word numbers (space separated), 'u' to undo, 'x' to clear: ")?;
        match input.as_str() {
            "u" => {
                quiz.deselect_last();
                continue;
            }
            "x" => {
                quiz.clear();
                continue;
            }
            _ => {}
        }
        for token in input.split_whitespace() {
            match token.parse::<usize>() {
                Ok(n) if n >= 1 && quiz.select(n - 1) => {}
                _ => print_warning(&format!("Ignoring '{}'", token)),
            }
        }

        match wizard.verify() {
            Ok(()) => {
                print_success("Recovery phrase verified");
                return Ok(());
            }
            Err(e) => print_error(&e.user_message()),
        }
    }
}

fn choose_password(wizard: &mut SetupWizard) -> Result<Zeroizing<String>> {
    println!();
    println!("Choose a password to encrypt your recovery phrase.");
    loop {
        let password = prompt_password("Password: ")?;
        let confirmation = prompt_password("Confirm password: ")?;
        match wizard.set_password(&password, &confirmation) {
            Ok(_) => return Ok(password),
            Err(e) => {
                print_error(&e.user_message());
                let missing = PasswordChecks::evaluate(&password).missing();
                if !missing.is_empty() {
                    println!("Password needs {}", missing.join(", "));
                }
            }
        }
    }
}

async fn menu(wizard: &SetupWizard, mut session: WalletSession) -> Result<()> {
    loop {
        println!();
        println!("1) Balances  2) History  3) Send TRX  4) Send token  5) Show recovery phrase  6) Quit");
        match prompt("> ")?.as_str() {
            "1" => show_balances(&mut session).await,
            "2" => show_history(&mut session).await,
            "3" => {
                let (to, amount) = prompt_transfer("TRX")?;
                report_transfer(session.send_trx(&to, &amount).await);
            }
            "4" => {
                let symbol = match session.token() {
                    Some(token) => token.symbol.clone(),
                    None => {
                        print_warning("No token configured for this network");
                        continue;
                    }
                };
                let (to, amount) = prompt_transfer(&symbol)?;
                report_transfer(session.send_token(&to, &amount).await);
            }
            "5" => {
                let password = prompt_password("Password: ")?;
                match wizard.reveal_mnemonic(&password) {
                    Ok(mnemonic) => println!("{}", mnemonic.as_str()),
                    Err(e) => print_error(&e.user_message()),
                }
            }
            "6" | "q" | "quit" => return Ok(()),
            _ => print_warning("Unknown option"),
        }
    }
}

async fn show_balances(session: &mut WalletSession) {
    let symbol = session.token().map(|t| t.symbol.clone());
    let state = session.refresh_balances().await;
    if let Some(error) = &state.error {
        print_error(error);
        return;
    }
    if let Some(native) = &state.native {
        println!("TRX: {}", native);
    }
    match (&state.token, symbol) {
        (Some(token), _) => println!("{}: {}", token.token.symbol, token.amount),
        (None, Some(symbol)) => println!("{}: unavailable", symbol),
        (None, None) => {}
    }
}

async fn show_history(session: &mut WalletSession) {
    let state = session.refresh_history().await;
    if let Some(error) = &state.error {
        print_error(error);
    }
    if state.transactions.is_empty() {
        println!("No transactions yet");
        return;
    }
    let me = *session.wallet().address();
    for tx in &state.transactions {
        let (arrow, counterparty) = match tx.direction(&me) {
            TransferDirection::Outgoing => ("->", tx.to_address.as_str()),
            TransferDirection::Incoming => ("<-", tx.owner_address.as_str()),
            TransferDirection::SelfTransfer => ("<>", tx.to_address.as_str()),
        };
        let when = chrono::DateTime::from_timestamp_millis(tx.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let status = if tx.confirmed { "" } else { " (pending)" };
        println!("{} {} {} {} {}{}", when, arrow, counterparty, tx.amount, tx.token_type, status);
    }
}

fn prompt_transfer(symbol: &str) -> Result<(String, String)> {
    let to = prompt("Recipient address: ")?;
    let amount = prompt(&format!("Amount ({}): ", symbol))?;
    Ok((to, amount))
}

fn report_transfer(result: WalletResult<TransferReceipt>) {
    match result {
        Ok(receipt) => {
            print_success("Transaction sent");
            println!("ID: {}", receipt.tx_id);
            println!("Explorer: {}", receipt.explorer_url);
        }
        Err(e) => print_error(&e.user_message()),
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt for password input (hidden)
fn prompt_password(message: &str) -> Result<Zeroizing<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    Ok(Zeroizing::new(rpassword::read_password()?))
}

fn print_error(message: &str) {
    eprintln!("\x1b[31mError:\x1b[0m {}", message);
}

fn print_success(message: &str) {
    println!("\x1b[32m{}\x1b[0m", message);
}

fn print_warning(message: &str) {
    println!("\x1b[33mWarning:\x1b[0m {}", message);
}
