use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

use crate::defaults::Defaults;
use crate::document::WalletDocument;
use crate::error::QrTarget;
use crate::output::{document_filename, write_atomic, write_unique};
use crate::qr;
use crate::wallet::PaperWallet;

/// Paths written by one run, in write order.
#[derive(Debug)]
pub struct Artifacts {
    pub document: PathBuf,
    pub address_qr: PathBuf,
    pub private_key_qr: PathBuf,
}

pub fn generate() -> Result<PaperWallet> {
    let wallet = PaperWallet::generate().context("generating private key")?;
    debug!("derived address {}", wallet.address());
    Ok(wallet)
}

/// Document first, then the address QR, then the private key QR.
/// Stops at the first failure; earlier files stay on disk.
pub fn emit(wallet: &PaperWallet, out_dir: &Path, at: OffsetDateTime) -> Result<Artifacts> {
    let address = wallet.address();
    let private_key = wallet.private_key_hex();

    debug!("composing paper wallet document");
    let pdf = WalletDocument::compose(address, &private_key)
        .render()
        .context("rendering paper wallet PDF")?;
    let filename = document_filename(at).context("naming paper wallet PDF")?;
    let document = write_unique(&out_dir.join(filename), &pdf).context("saving paper wallet PDF")?;
    println!("✓ Paper wallet PDF saved to: {}", document.display());

    let address_qr =
        write_qr(address, QrTarget::Address, &out_dir.join(Defaults::ADDRESS_QR_FILE))?;
    println!("✓ QR code for Bitcoin address saved to: {}", address_qr.display());

    let private_key_qr = write_qr(
        &private_key,
        QrTarget::PrivateKey,
        &out_dir.join(Defaults::PRIVATE_KEY_QR_FILE),
    )?;
    println!("✓ QR code for private key saved to: {}", private_key_qr.display());

    Ok(Artifacts { document, address_qr, private_key_qr })
}

fn write_qr(payload: &str, target: QrTarget, path: &Path) -> Result<PathBuf> {
    debug!("encoding QR code for {target}");
    let png = qr::encode_png(payload, target)
        .with_context(|| format!("generating QR code for {target}"))?;
    write_atomic(path, &png).with_context(|| format!("saving QR code for {target}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::PrivateKey;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::fs;
    use time::macros::datetime;

    fn fixed_wallet() -> PaperWallet {
        PaperWallet::generate_with(&mut ChaCha20Rng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn writes_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let w = fixed_wallet();
        let out = emit(&w, dir.path(), datetime!(2024-05-06 07:08:09 UTC)).unwrap();

        assert_eq!(out.document, dir.path().join("bitcoin_paper_wallet_2024-05-06_07-08-09.pdf"));
        assert_eq!(out.address_qr, dir.path().join("bitcoin_address.png"));
        assert_eq!(out.private_key_qr, dir.path().join("private_key.png"));
        assert!(fs::read(&out.document).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn images_hold_the_same_strings_as_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let w = fixed_wallet();
        let out = emit(&w, dir.path(), datetime!(2024-05-06 07:08:09 UTC)).unwrap();

        let doc = WalletDocument::compose(w.address(), &w.private_key_hex());
        assert_eq!(doc.lines()[1].text, format!("Bitcoin Address: {}", w.address()));
        assert_eq!(doc.lines()[2].text, format!("Private Key: {}", w.private_key_hex().as_str()));

        assert_eq!(
            fs::read(&out.address_qr).unwrap(),
            qr::encode_png(w.address(), QrTarget::Address).unwrap()
        );
        assert_eq!(
            fs::read(&out.private_key_qr).unwrap(),
            qr::encode_png(&w.private_key_hex(), QrTarget::PrivateKey).unwrap()
        );
    }

    #[test]
    fn second_run_same_second_keeps_both_documents_and_replaces_images() {
        let dir = tempfile::tempdir().unwrap();
        let at = datetime!(2024-05-06 07:08:09 UTC);
        let first = emit(&fixed_wallet(), dir.path(), at).unwrap();

        let one = PrivateKey::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        let other = PaperWallet::from_private_key(one).unwrap();
        let second = emit(&other, dir.path(), at).unwrap();

        assert_ne!(first.document, second.document);
        assert!(first.document.exists() && second.document.exists());
        assert_eq!(first.address_qr, second.address_qr);
        assert_eq!(
            fs::read(&second.address_qr).unwrap(),
            qr::encode_png(other.address(), QrTarget::Address).unwrap()
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 4);
    }

    #[test]
    fn unwritable_dir_fails_before_any_image() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("file");
        fs::write(&not_a_dir, b"").unwrap();

        let at = datetime!(2024-05-06 07:08:09 UTC);
        let err = emit(&fixed_wallet(), &not_a_dir, at).unwrap_err();
        assert!(format!("{err:#}").contains("saving paper wallet PDF"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
