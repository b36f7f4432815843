use std::io::BufWriter;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::defaults::Defaults;
use crate::error::{Error, Result};

/// One laid-out line of text on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font: BuiltinFont,
    pub size_pt: f32,
    /// Baseline offset from the top edge of the page.
    pub top_mm: f32,
}

/// Single A4 portrait page: title, address line, private key line.
#[derive(Debug, Clone)]
pub struct WalletDocument {
    lines: Vec<TextLine>,
}

impl WalletDocument {
    pub fn compose(address: &str, private_key_hex: &str) -> Self {
        let texts = [
            (Defaults::TITLE.to_string(), Defaults::TITLE_FONT, Defaults::TITLE_SIZE_PT),
            (
                format!("{}{}", Defaults::ADDRESS_LABEL, address),
                Defaults::BODY_FONT,
                Defaults::BODY_SIZE_PT,
            ),
            (
                format!("{}{}", Defaults::PRIVATE_KEY_LABEL, private_key_hex),
                Defaults::BODY_FONT,
                Defaults::BODY_SIZE_PT,
            ),
        ];

        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(i, (text, font, size_pt))| TextLine {
                text,
                font,
                size_pt,
                top_mm: Defaults::MARGIN_MM + Defaults::LINE_PITCH_MM * (i as f32 + 1.0),
            })
            .collect();

        Self { lines }
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Distinct fonts in first-use order; each is embedded once.
    pub fn fonts(&self) -> Vec<BuiltinFont> {
        let mut out: Vec<BuiltinFont> = Vec::new();
        for line in &self.lines {
            if !out.contains(&line.font) {
                out.push(line.font);
            }
        }
        out
    }

    /// Render to PDF bytes. Nothing touches the filesystem here.
    pub fn render(&self) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            Defaults::TITLE,
            Mm(Defaults::PAGE_WIDTH_MM),
            Mm(Defaults::PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let mut refs = Vec::new();
        for font in self.fonts() {
            let r = doc
                .add_builtin_font(font)
                .map_err(|e| Error::Document(format!("loading font {font:?}: {e:?}")))?;
            refs.push((font, r));
        }

        for line in &self.lines {
            let Some((_, font)) = refs.iter().find(|(f, _)| *f == line.font) else {
                return Err(Error::Document(format!("font {:?} not loaded", line.font)));
            };
            // PDF origin is bottom-left
            layer.use_text(
                line.text.clone(),
                line.size_pt,
                Mm(Defaults::MARGIN_MM),
                Mm(Defaults::PAGE_HEIGHT_MM - line.top_mm),
                font,
            );
        }

        let mut w = BufWriter::new(Vec::new());
        doc.save(&mut w).map_err(|e| Error::Document(format!("{e:?}")))?;
        w.into_inner()
            .map_err(|e| Error::Document(format!("flushing PDF buffer: {}", e.error())))
    }
}
