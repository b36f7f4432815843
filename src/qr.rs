use std::io::Cursor;

use image::{imageops, DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::defaults::Defaults;
use crate::error::{Error, QrTarget, Result};

/// Light modules required around the symbol.
const QUIET_ZONE_MODULES: u32 = 4;

/// Placement of the symbol on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub modules: u32,
    pub module_px: u32,
    /// Top-left corner of the first data module.
    pub origin_px: u32,
}

fn encode(payload: &str, target: QrTarget) -> Result<QrCode> {
    QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
        .map_err(|e| Error::QrEncode { target, reason: e.to_string() })
}

fn layout_for(code: &QrCode, target: QrTarget) -> Result<Layout> {
    let modules = code.width() as u32;
    let total = modules + 2 * QUIET_ZONE_MODULES;
    let module_px = Defaults::QR_SIZE_PX / total;
    if module_px == 0 {
        return Err(Error::QrEncode {
            target,
            reason: format!(
                "{total} modules do not fit in {px}x{px}",
                px = Defaults::QR_SIZE_PX
            ),
        });
    }
    let margin = (Defaults::QR_SIZE_PX - total * module_px) / 2;
    Ok(Layout { modules, module_px, origin_px: margin + QUIET_ZONE_MODULES * module_px })
}

/// Render `payload` centred on a white square canvas.
pub fn render(payload: &str, target: QrTarget) -> Result<(GrayImage, Layout)> {
    let code = encode(payload, target)?;
    let layout = layout_for(&code, target)?;

    let symbol = code
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(layout.module_px, layout.module_px)
        .build();

    let size = Defaults::QR_SIZE_PX;
    let mut canvas = GrayImage::from_pixel(size, size, Luma([255u8]));
    imageops::replace(&mut canvas, &symbol, layout.origin_px as i64, layout.origin_px as i64);
    Ok((canvas, layout))
}

/// PNG bytes of the QR code for `payload`.
pub fn encode_png(payload: &str, target: QrTarget) -> Result<Vec<u8>> {
    let (canvas, _) = render(payload, target)?;
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(canvas)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::QrEncode { target, reason: format!("PNG encoding: {e}") })?;
    Ok(bytes)
}
