//! Bitmap text rendering
//!
//! Text is walked byte by byte. Bytes without a glyph (control codes and
//! everything above 0x7E, which covers every byte of a multi-byte UTF-8
//! sequence) are skipped and do not move the pen.

use crate::font::FONT;
use crate::framebuffer::Framebuffer;

/// Render `text` with its baseline at `y`, starting at pen position `x`
///
/// Glyph rows are plotted downward from `y - y_offset`. There is no line
/// wrapping: text past the right edge wraps through the coordinate space.
///
/// Returns the pen position after the last glyph.
pub fn render_string(fb: &mut Framebuffer, x: i32, y: i32, text: &str) -> i32 {
    let mut pen = x;
    for code in text.bytes() {
        let Some(glyph) = FONT.glyph(code) else {
            continue;
        };
        let left = pen + glyph.x_offset as i32;
        let top = y - glyph.y_offset as i32;
        for (xx, yy) in glyph.lit_pixels(&FONT) {
            fb.set(left + xx, top - yy);
        }
        pen += glyph.x_advance as i32;
    }
    pen
}

/// Total pen advance of `text` in pixels
pub fn text_width(text: &str) -> i32 {
    text.bytes()
        .filter_map(|code| FONT.glyph(code))
        .map(|g| g.x_advance as i32)
        .sum()
}
