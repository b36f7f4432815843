use std::fmt;

use rand_core::{CryptoRng, RngCore};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

/// Draws beyond this are treated as a broken entropy source. A uniform
/// 32-byte draw lands outside [1, n) with probability ~2^-128.
const MAX_DRAWS: usize = 16;

/// A secp256k1 secret scalar (32 bytes, zeroized on drop).
#[derive(Clone)]
pub struct PrivateKey {
    bytes: [u8; 32],
}

impl PrivateKey {
    /// Generate a fresh key from the given entropy source.
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut candidate = [0u8; 32];
        for _ in 0..MAX_DRAWS {
            rng.try_fill_bytes(&mut candidate)
                .map_err(|e| Error::KeyGeneration(format!("entropy source unavailable: {e}")))?;
            if let Ok(mut sk) = SecretKey::from_slice(&candidate) {
                sk.non_secure_erase();
                let key = Self { bytes: candidate };
                candidate.zeroize();
                return Ok(key);
            }
        }
        candidate.zeroize();
        Err(Error::KeyGeneration(format!(
            "no valid secp256k1 scalar after {MAX_DRAWS} draws"
        )))
    }

    /// Rebuild a key from its 32 raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(Error::KeyGeneration(format!(
                "secret key must be exactly 32 bytes (got {})",
                bytes.len()
            )));
        }
        secret_key(bytes)?.non_secure_erase();
        let mut out = [0u8; 32];
        out.copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Parse 64 hex chars, optionally 0x/0X-prefixed.
    pub fn from_hex(input: &str) -> Result<Self> {
        let s = input.trim();
        let h = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let mut bytes = hex::decode(h)
            .map_err(|e| Error::KeyGeneration(format!("bad secret key hex: {e}")))?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Lowercase hex, no 0x prefix. Wiped when dropped.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.bytes))
    }

    /// SEC1 compressed public key (0x02/0x03 || X).
    pub fn public_key_compressed(&self) -> Result<[u8; 33]> {
        let mut sk = secret_key(&self.bytes)?;
        let secp = Secp256k1::signing_only();
        let pk = PublicKey::from_secret_key(&secp, &sk).serialize();
        sk.non_secure_erase();
        Ok(pk)
    }
}

fn secret_key(bytes: &[u8]) -> Result<SecretKey> {
    SecretKey::from_slice(bytes)
        .map_err(|e| Error::KeyGeneration(format!("invalid secp256k1 secret key: {e}")))
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}
