//! QR codes for chat links, for counters, flyers, and packaging inserts.

use image::{ImageBuffer, Luma};
use qrcode::{Color, EcLevel, QrCode};
use wachat_core::error::WachatError;

use crate::link::ChatLink;

/// Pixels per module in PNG output.
pub const DEFAULT_MODULE_PX: u32 = 10;

/// Modules of white border around the code.
const QUIET_ZONE: usize = 2;

/// Largest PNG side accepted, in pixels.
pub const MAX_SIDE_PX: u32 = 16_384;

fn encode(link: &ChatLink) -> Result<QrCode, WachatError> {
    // Printed codes get scuffed; medium correction still fits long messages.
    QrCode::with_error_correction_level(link.url.as_bytes(), EcLevel::M)
        .map_err(|e| WachatError::Qr(format!("QR generation failed: {e}")))
}

/// Render `link` for the terminal with Unicode half blocks.
///
/// Two module rows share one text line (`▀`, `▄`, `█`, space), dark on light.
pub fn to_terminal(link: &ChatLink) -> Result<String, WachatError> {
    let code = encode(link)?;
    let width = code.width();
    let colors = code.into_colors();
    let dark = |row: usize, col: usize| {
        row < width && col < width && colors[row * width + col] == Color::Dark
    };

    let mut out = String::new();
    for row in (0..width).step_by(2) {
        for col in 0..width {
            out.push(match (dark(row, col), dark(row + 1, col)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    Ok(out)
}

/// Render `link` as PNG bytes with `module_px` pixels per module.
pub fn to_png(link: &ChatLink, module_px: u32) -> Result<Vec<u8>, WachatError> {
    if module_px == 0 {
        return Err(WachatError::Qr("module size must be at least 1px".to_string()));
    }
    let code = encode(link)?;
    let modules = code.width();
    let side = u32::try_from(modules + QUIET_ZONE * 2)
        .ok()
        .and_then(|m| m.checked_mul(module_px))
        .filter(|side| *side <= MAX_SIDE_PX)
        .ok_or_else(|| WachatError::Qr("QR image too large".to_string()))?;

    let img = ImageBuffer::from_fn(side, side, |x, y| {
        let mx = (x / module_px) as usize;
        let my = (y / module_px) as usize;
        let inside = (QUIET_ZONE..QUIET_ZONE + modules).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + modules).contains(&my);
        if inside && code[(mx - QUIET_ZONE, my - QUIET_ZONE)] == Color::Dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });

    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .map_err(|e| WachatError::Qr(format!("PNG encoding failed: {e}")))?;
    Ok(buf.into_inner())
}
