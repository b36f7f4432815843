use clap::Parser;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Bitcoin paper wallet generator (offline). No network calls.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate a Bitcoin paper wallet: PDF plus address and private key QR codes"
)]
pub struct Cli {
    /// Output directory for paper wallet PDF and QR code images
    #[arg(long = "outputDir", visible_alias = "output-dir", default_value = Defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,
}
