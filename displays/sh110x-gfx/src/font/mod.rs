//! Glyph atlas
//!
//! A single proportional typeface stored in the Adafruit-GFX layout: one
//! shared bitmap blob plus a metrics table indexed by `code - first`.
//! Glyph bitmaps are packed row-major, MSB first, and start on a byte
//! boundary.

mod data;

/// Metrics of one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Offset of the first bitmap byte in [`Font::bitmap`]
    pub bitmap_offset: u16,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Pen advance after drawing
    pub x_advance: u8,
    /// Left bearing from the pen position
    pub x_offset: i8,
    /// Distance from the baseline to the top row (negative is above)
    pub y_offset: i8,
}

impl Glyph {
    /// Create a glyph entry
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// Iterate the glyph's lit pixels as local `(xx, yy)`, row-major
    ///
    /// `yy` counts down from the top row.
    pub fn lit_pixels<'a>(&self, font: &'a Font) -> GlyphPixels<'a> {
        GlyphPixels {
            bitmap: font.bitmap,
            offset: self.bitmap_offset as usize,
            width: self.width as u16,
            total: self.width as u16 * self.height as u16,
            bit: 0,
            bits: 0,
        }
    }
}

/// Iterator over a glyph's lit pixels, see [`Glyph::lit_pixels`]
pub struct GlyphPixels<'a> {
    bitmap: &'a [u8],
    offset: usize,
    width: u16,
    total: u16,
    bit: u16,
    bits: u8,
}

impl Iterator for GlyphPixels<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.bit < self.total {
            if self.bit & 7 == 0 {
                self.bits = self.bitmap.get(self.offset).copied().unwrap_or(0);
                self.offset += 1;
            }
            let pos = self.bit;
            self.bit += 1;
            let lit = self.bits & 0x80 != 0;
            self.bits <<= 1;
            if lit {
                return Some(((pos % self.width) as i32, (pos / self.width) as i32));
            }
        }
        None
    }
}

/// Bitmap typeface
pub struct Font {
    /// Packed glyph bitmaps
    pub bitmap: &'static [u8],
    /// Metrics for `first ..= last`
    pub glyphs: &'static [Glyph],
    /// First mapped code
    pub first: u8,
    /// Last mapped code
    pub last: u8,
}

impl Font {
    /// Look up the glyph for a byte
    ///
    /// Codes outside `first ..= last` are absent.
    pub fn glyph(&self, code: u8) -> Option<&Glyph> {
        if code < self.first || code > self.last {
            return None;
        }
        self.glyphs.get((code - self.first) as usize)
    }
}

/// The resident 5x7 proportional face covering printable ASCII
pub static FONT: Font = Font {
    bitmap: &data::BITMAP,
    glyphs: &data::GLYPHS,
    first: 0x20,
    last: 0x7E,
};

/// Look up a printable ASCII glyph in [`FONT`]
pub fn lookup(code: u8) -> Option<&'static Glyph> {
    FONT.glyph(code)
}
