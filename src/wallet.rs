use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroizing;

use crate::address::p2pkh_from_pubkey;
use crate::error::Result;
use crate::key::PrivateKey;

/// One generated key and everything derived from it.
#[derive(Debug)]
pub struct PaperWallet {
    private_key: PrivateKey,
    public_key: [u8; 33],
    address: String,
}

impl PaperWallet {
    /// Fresh wallet from OS entropy.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        Self::from_private_key(PrivateKey::generate_with(rng)?)
    }

    pub fn from_private_key(private_key: PrivateKey) -> Result<Self> {
        let public_key = private_key.public_key_compressed()?;
        let address = p2pkh_from_pubkey(&public_key)?;
        Ok(Self { private_key, public_key, address })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn private_key_hex(&self) -> Zeroizing<String> {
        self.private_key.to_hex()
    }

    pub fn public_key_compressed(&self) -> &[u8; 33] {
        &self.public_key
    }
}
