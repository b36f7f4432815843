//! Central place for all default values.
//! Update these and the whole app picks them up.

use printpdf::BuiltinFont;
use time::format_description::FormatItem;
use time::macros::format_description;

pub struct Defaults;

impl Defaults {
    /* CLI */
    pub const OUTPUT_DIR: &'static str = ".";

    /* Output files */
    pub const DOCUMENT_PREFIX: &'static str = "bitcoin_paper_wallet_";
    pub const DOCUMENT_EXT: &'static str = "pdf";
    pub const ADDRESS_QR_FILE: &'static str = "bitcoin_address.png";
    pub const PRIVATE_KEY_QR_FILE: &'static str = "private_key.png";
    pub const TIMESTAMP_FORMAT: &'static [FormatItem<'static>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");

    /* QR */
    pub const QR_SIZE_PX: u32 = 256;

    /* Document (A4 portrait, mm) */
    pub const PAGE_WIDTH_MM: f32 = 210.0;
    pub const PAGE_HEIGHT_MM: f32 = 297.0;
    pub const MARGIN_MM: f32 = 10.0;
    pub const LINE_PITCH_MM: f32 = 10.0;
    pub const TITLE: &'static str = "Bitcoin Paper Wallet";
    pub const TITLE_FONT: BuiltinFont = BuiltinFont::HelveticaBold;
    pub const TITLE_SIZE_PT: f32 = 16.0;
    pub const BODY_FONT: BuiltinFont = BuiltinFont::Helvetica;
    pub const BODY_SIZE_PT: f32 = 12.0;
    pub const ADDRESS_LABEL: &'static str = "Bitcoin Address: ";
    pub const PRIVATE_KEY_LABEL: &'static str = "Private Key: ";
}
