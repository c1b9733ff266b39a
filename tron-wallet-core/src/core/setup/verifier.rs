//! Mnemonic recording check
//!
//! The user is shown the mnemonic words in random order and must pick them
//! back in the original order. Each shuffled slot can be picked once.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use zeroize::Zeroizing;

use crate::core::crypto::keys::SecureSeedPhrase;
use crate::shared::constants::messages;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

pub struct MnemonicQuiz {
    expected: Zeroizing<Vec<String>>,
    shuffled: Zeroizing<Vec<String>>,
    /// Indices into `shuffled`, in pick order
    selected: Vec<usize>,
}

impl MnemonicQuiz {
    pub fn new(mnemonic: &SecureSeedPhrase) -> Self {
        let expected: Vec<String> = mnemonic.words().into_iter().map(str::to_string).collect();
        let mut shuffled = expected.clone();
        shuffled.shuffle(&mut OsRng);
        Self {
            expected: Zeroizing::new(expected),
            shuffled: Zeroizing::new(shuffled),
            selected: Vec::new(),
        }
    }

    pub fn shuffled_words(&self) -> &[String] {
        &self.shuffled
    }

    pub fn word_count(&self) -> usize {
        self.expected.len()
    }

    /// Pick the shuffled word at `index`. Returns `false` if the slot is out
    /// of range or already picked.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.shuffled.len() || self.is_used(index) {
            return false;
        }
        self.selected.push(index);
        true
    }

    /// Undo the most recent pick
    pub fn deselect_last(&mut self) -> Option<usize> {
        self.selected.pop()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_words(&self) -> Vec<&str> {
        self.selected.iter().map(|&i| self.shuffled[i].as_str()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.selected.len() == self.expected.len()
    }

    /// Check the picked sequence against the mnemonic.
    ///
    /// An incomplete pick keeps the selection; a wrong order clears it.
    pub fn verify(&mut self) -> WalletResult<()> {
        if !self.is_complete() {
            return Err(WalletError::verification(messages::SELECT_ALL_WORDS));
        }
        let matches = self
            .selected_words()
            .iter()
            .zip(self.expected.iter())
            .all(|(picked, expected)| *picked == expected.as_str());
        if !matches {
            self.clear();
            return Err(WalletError::verification(messages::WRONG_WORD_ORDER));
        }
        log::info!("Mnemonic verified");
        Ok(())
    }
}
