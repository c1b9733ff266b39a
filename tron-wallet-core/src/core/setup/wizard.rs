//! Setup wizard state machine
//!
//! `Generate → Verify → Password → Details`. Steps only move forward. The
//! mnemonic may be regenerated any number of times while in `Generate`, and
//! the quiz may be retried without limit while in `Verify`.

use std::fmt;
use std::sync::Arc;

use crate::core::crypto::encryption::{EncryptedMnemonic, MnemonicCipher};
use crate::core::crypto::keys::{generate_mnemonic_with_words, SecureSeedPhrase};
use crate::core::crypto::password::PasswordChecks;
use crate::core::rpc::TronRpc;
use crate::core::wallet::WalletSession;
use crate::domain::entities::WalletInfo;
use crate::shared::config::WalletConfig;
use crate::shared::constants::{messages, DEFAULT_MNEMONIC_WORDS};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

use super::MnemonicQuiz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Generate,
    Verify,
    Password,
    Details,
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Generate => "generate",
            Self::Verify => "verify",
            Self::Password => "password",
            Self::Details => "details",
        };
        f.write_str(name)
    }
}

pub struct SetupWizard {
    step: SetupStep,
    word_count: usize,
    cipher: MnemonicCipher,
    /// Plaintext mnemonic; dropped once it has been encrypted
    mnemonic: Option<SecureSeedPhrase>,
    quiz: Option<MnemonicQuiz>,
    encrypted: Option<EncryptedMnemonic>,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new(MnemonicCipher::default())
    }
}

impl SetupWizard {
    pub fn new(cipher: MnemonicCipher) -> Self {
        Self {
            step: SetupStep::Generate,
            word_count: DEFAULT_MNEMONIC_WORDS,
            cipher,
            mnemonic: None,
            quiz: None,
            encrypted: None,
        }
    }

    /// Wizard using the KDF and cipher selected in `config`
    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(MnemonicCipher::new(config.password.clone(), config.cipher))
    }

    /// Generate mnemonics of `word_count` words instead of 12
    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    fn require_step(&self, expected: SetupStep) -> WalletResult<()> {
        if self.step != expected {
            return Err(WalletError::internal(format!(
                "Setup is at the {} step, not {}",
                self.step, expected
            )));
        }
        Ok(())
    }

    /// Generate a new mnemonic, replacing any previous one
    pub fn generate(&mut self) -> WalletResult<&SecureSeedPhrase> {
        self.require_step(SetupStep::Generate)?;
        let mnemonic = generate_mnemonic_with_words(self.word_count)?;
        Ok(self.mnemonic.insert(mnemonic))
    }

    /// The plaintext mnemonic, until it has been encrypted
    pub fn mnemonic(&self) -> Option<&SecureSeedPhrase> {
        self.mnemonic.as_ref()
    }

    /// The user has written the words down; start the quiz
    pub fn confirm_recorded(&mut self) -> WalletResult<&mut MnemonicQuiz> {
        self.require_step(SetupStep::Generate)?;
        let mnemonic = self
            .mnemonic
            .as_ref()
            .ok_or_else(|| WalletError::wallet_not_initialized("No mnemonic generated"))?;
        self.step = SetupStep::Verify;
        Ok(self.quiz.insert(MnemonicQuiz::new(mnemonic)))
    }

    pub fn quiz(&mut self) -> Option<&mut MnemonicQuiz> {
        self.quiz.as_mut()
    }

    /// Check the quiz; on success advance to the password step
    pub fn verify(&mut self) -> WalletResult<()> {
        self.require_step(SetupStep::Verify)?;
        let quiz = self
            .quiz
            .as_mut()
            .ok_or_else(|| WalletError::internal("Quiz not started"))?;
        quiz.verify()?;
        self.quiz = None;
        self.step = SetupStep::Password;
        Ok(())
    }

    /// Encrypt the mnemonic under `password`. The plaintext copy is dropped
    /// on success.
    pub fn set_password(&mut self, password: &str, confirmation: &str) -> WalletResult<&EncryptedMnemonic> {
        self.require_step(SetupStep::Password)?;
        if !PasswordChecks::evaluate(password).is_strong() {
            return Err(WalletError::validation(messages::WEAK_PASSWORD));
        }
        if password != confirmation {
            return Err(WalletError::validation(messages::PASSWORD_MISMATCH));
        }
        let mnemonic = self
            .mnemonic
            .as_ref()
            .ok_or_else(|| WalletError::wallet_not_initialized("No mnemonic generated"))?;

        let encrypted = self.cipher.encrypt(mnemonic, password)?;
        self.mnemonic = None;
        log::info!("Mnemonic encrypted");
        Ok(self.encrypted.insert(encrypted))
    }

    pub fn encrypted_mnemonic(&self) -> Option<&EncryptedMnemonic> {
        self.encrypted.as_ref()
    }

    /// Decrypt the stored mnemonic, derive the wallet and open a session.
    ///
    /// Succeeds once per wizard; later calls fail with
    /// [`WalletError::WalletAlreadyExists`].
    pub fn create_session(
        &mut self,
        password: &str,
        client: Arc<dyn TronRpc>,
        config: &WalletConfig,
    ) -> WalletResult<WalletSession> {
        if self.step == SetupStep::Details {
            return Err(WalletError::wallet_already_exists("A wallet was already created in this setup"));
        }
        self.require_step(SetupStep::Password)?;
        let encrypted = self
            .encrypted
            .as_ref()
            .ok_or_else(|| WalletError::wallet_not_initialized("Set a password first"))?;

        let mnemonic = self.cipher.decrypt(encrypted, password)?;
        let wallet = WalletInfo::from_mnemonic(&mnemonic).map_err(|e| {
            log::error!("Wallet derivation failed: {}", e);
            WalletError::crypto(messages::WALLET_CREATION_FAILED)
        })?;

        self.step = SetupStep::Details;
        Ok(WalletSession::new(wallet, client, config))
    }

    /// Decrypt the mnemonic for display
    pub fn reveal_mnemonic(&self, password: &str) -> WalletResult<SecureSeedPhrase> {
        let encrypted = self
            .encrypted
            .as_ref()
            .ok_or_else(|| WalletError::wallet_not_initialized("Mnemonic has not been encrypted yet"))?;
        self.cipher.decrypt(encrypted, password)
    }
}
