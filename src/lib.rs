//! Offline Bitcoin paper wallet generation: one secp256k1 key, its P2PKH
//! mainnet address, a printable PDF and two QR code images.

pub mod address;
pub mod cli;
pub mod commands;
pub mod defaults;
pub mod document;
pub mod error;
pub mod key;
pub mod output;
pub mod qr;
pub mod wallet;

pub use error::{Error, QrTarget, Result};
pub use wallet::PaperWallet;
