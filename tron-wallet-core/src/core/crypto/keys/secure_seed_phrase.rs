use zeroize::Zeroizing;

/// Secure seed phrase wrapper.
///
/// Cleared from memory on drop. Deliberately neither `Debug` nor `Clone`.
pub struct SecureSeedPhrase {
    phrase: Zeroizing<String>,
}

impl SecureSeedPhrase {
    /// Wrap a phrase, normalizing runs of whitespace to single spaces
    pub fn new(phrase: String) -> Self {
        let phrase = Zeroizing::new(phrase);
        let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
        Self {
            phrase: Zeroizing::new(normalized),
        }
    }

    /// Get the seed phrase as a &str
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Words in order
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(' ').collect()
    }

    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }
}

impl PartialEq for SecureSeedPhrase {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SecureSeedPhrase {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_seed_phrase_creation() {
        let seed_phrase = SecureSeedPhrase::new("test  seed\tphrase ".to_string());
        assert_eq!(seed_phrase.words(), vec!["test", "seed", "phrase"]);
        assert_eq!(seed_phrase.as_str(), "test seed phrase");
        assert_eq!(seed_phrase.word_count(), 3);
    }
}
