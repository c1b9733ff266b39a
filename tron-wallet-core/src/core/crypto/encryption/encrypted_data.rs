use super::EncryptionAlgorithm;
use crate::shared::constants::{NONCE_SIZE, TAG_SIZE};

/// Output of an AEAD encryption, tag kept separate from the ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedData {
    pub algorithm: EncryptionAlgorithm,
    pub ciphertext: Vec<u8>,
    pub nonce: [u8; NONCE_SIZE],
    pub tag: [u8; TAG_SIZE],
}

impl EncryptedData {
    /// Ciphertext followed by the tag, as the AEAD crates produce it
    pub fn sealed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.ciphertext.len() + TAG_SIZE);
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Split a `ciphertext || tag` buffer. `None` when shorter than a tag.
    pub fn from_sealed(algorithm: EncryptionAlgorithm, nonce: [u8; NONCE_SIZE], sealed: &[u8]) -> Option<Self> {
        if sealed.len() < TAG_SIZE {
            return None;
        }
        let (ciphertext, tag_bytes) = sealed.split_at(sealed.len() - TAG_SIZE);
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(tag_bytes);
        Some(Self {
            algorithm,
            ciphertext: ciphertext.to_vec(),
            nonce,
            tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sealed_split() {
        let sealed: Vec<u8> = (0u8..20).collect();
        let data = EncryptedData::from_sealed(EncryptionAlgorithm::AES256GCM, [5u8; NONCE_SIZE], &sealed)
            .expect("long enough");
        assert_eq!(data.ciphertext, vec![0, 1, 2, 3]);
        assert_eq!(data.tag[0], 4);
        assert_eq!(data.sealed(), sealed);

        assert!(EncryptedData::from_sealed(EncryptionAlgorithm::AES256GCM, [0u8; NONCE_SIZE], &[1, 2, 3]).is_none());
    }
}
