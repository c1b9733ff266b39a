use crate::shared::constants::SIGNATURE_SIZE;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

/// Recoverable ECDSA signature in Tron's `r || s || v` layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// Recovery id plus 27
    pub v: u8,
}

impl TransactionSignature {
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Lowercase hex without prefix, the form `broadcasttransaction` expects
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(signature: &str) -> WalletResult<Self> {
        let bytes = hex::decode(signature.trim_start_matches("0x"))?;
        if bytes.len() != SIGNATURE_SIZE {
            return Err(WalletError::crypto(format!(
                "Signature must be {} bytes, got {}",
                SIGNATURE_SIZE,
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Recovery id in 0..=3
    pub fn recovery_id(&self) -> i32 {
        i32::from(self.v) - 27
    }
}
