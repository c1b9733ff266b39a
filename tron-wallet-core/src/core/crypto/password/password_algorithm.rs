use std::fmt;
use std::str::FromStr;

use crate::shared::error::WalletError;

/// Password-based key derivation functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordAlgorithm {
    Argon2,
    PBKDF2,
}

impl PasswordAlgorithm {
    /// Identifier stored in the encryption envelope
    pub fn id(&self) -> u8 {
        match self {
            Self::Argon2 => 1,
            Self::PBKDF2 => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Argon2),
            2 => Some(Self::PBKDF2),
            _ => None,
        }
    }
}

impl fmt::Display for PasswordAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argon2 => write!(f, "argon2"),
            Self::PBKDF2 => write!(f, "pbkdf2"),
        }
    }
}

impl FromStr for PasswordAlgorithm {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(Self::Argon2),
            "pbkdf2" => Ok(Self::PBKDF2),
            other => Err(WalletError::config(format!("Unknown key derivation function: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for algorithm in [PasswordAlgorithm::Argon2, PasswordAlgorithm::PBKDF2] {
            assert_eq!(PasswordAlgorithm::from_id(algorithm.id()), Some(algorithm));
        }
        assert_eq!(PasswordAlgorithm::from_id(0), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Argon2".parse::<PasswordAlgorithm>().unwrap(), PasswordAlgorithm::Argon2);
        assert_eq!("pbkdf2".parse::<PasswordAlgorithm>().unwrap(), PasswordAlgorithm::PBKDF2);
        assert!("scrypt".parse::<PasswordAlgorithm>().is_err());
    }
}
