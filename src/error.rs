use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which of the two QR codes a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrTarget {
    Address,
    PrivateKey,
}

impl fmt::Display for QrTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrTarget::Address => f.write_str("Bitcoin address"),
            QrTarget::PrivateKey => f.write_str("private key"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("address derivation failed: {0}")]
    AddressDerivation(String),

    #[error("rendering paper wallet PDF failed: {0}")]
    Document(String),

    #[error("formatting timestamp failed: {0}")]
    Timestamp(String),

    #[error("writing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("QR code for {target} failed: {reason}")]
    QrEncode { target: QrTarget, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
