use ripemd::Ripemd160;
use secp256k1::PublicKey;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Mainnet P2PKH version byte.
pub const MAINNET_P2PKH: u8 = 0x00;

/// HASH160 = RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripemd = Ripemd160::digest(sha);
    let mut out = [0u8; 20];
    out.copy_from_slice(&ripemd);
    out
}

/// Base58Check(0x00 || HASH160(pubkey)) for a 33-byte compressed pubkey.
pub fn p2pkh_from_pubkey(pubkey: &[u8]) -> Result<String> {
    if pubkey.len() != 33 {
        return Err(Error::AddressDerivation(format!(
            "expected 33-byte compressed pubkey, got {} bytes",
            pubkey.len()
        )));
    }
    PublicKey::from_slice(pubkey)
        .map_err(|e| Error::AddressDerivation(format!("malformed public key: {e}")))?;

    let hash = hash160(pubkey);
    Ok(bs58::encode(hash).with_check_version(MAINNET_P2PKH).into_string())
}

/// Decode a mainnet P2PKH address back to its pubkey hash.
pub fn decode_p2pkh(address: &str) -> Result<[u8; 20]> {
    let data = bs58::decode(address)
        .with_check(Some(MAINNET_P2PKH))
        .into_vec()
        .map_err(|e| {
            Error::AddressDerivation(format!("bad base58check address '{address}': {e}"))
        })?;
    // data = version || hash
    if data.len() != 21 {
        return Err(Error::AddressDerivation(format!(
            "P2PKH payload must be 21 bytes (got {})",
            data.len()
        )));
    }
    let mut out = [0u8; 20];
    out.copy_from_slice(&data[1..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn known_vector_for_generator_point() {
        let pk = hex::decode(G_COMPRESSED).unwrap();
        assert_eq!(hex::encode(hash160(&pk)), "751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(p2pkh_from_pubkey(&pk).unwrap(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn decode_round_trips_to_hash160() {
        let pk = hex::decode(G_COMPRESSED).unwrap();
        let addr = p2pkh_from_pubkey(&pk).unwrap();
        assert_eq!(decode_p2pkh(&addr).unwrap(), hash160(&pk));
    }

    #[test]
    fn malformed_pubkeys_are_rejected() {
        let mut bad_prefix = hex::decode(G_COMPRESSED).unwrap();
        bad_prefix[0] = 0x05;
        assert!(matches!(p2pkh_from_pubkey(&bad_prefix), Err(Error::AddressDerivation(_))));
        assert!(p2pkh_from_pubkey(&[0x02; 32]).is_err());
        assert!(p2pkh_from_pubkey(&[]).is_err());
    }

    #[test]
    fn decode_rejects_bad_checksum_and_version() {
        // last char flipped
        assert!(decode_p2pkh("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ").is_err());
        // P2SH version 0x05
        let p2sh = bs58::encode([0u8; 20]).with_check_version(0x05).into_string();
        assert!(decode_p2pkh(&p2sh).is_err());
    }
}
