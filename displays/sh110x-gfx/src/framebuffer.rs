//! Bit-packed framebuffer
//!
//! Device RAM is organised as 16 pages of 64 columns. Each byte holds 8
//! vertically stacked device pixels, LSB on top. Byte `i` covers device
//! column `i % 64` and device rows `8 * (i / 64) ..= 8 * (i / 64) + 7`.
//!
//! The panel is mounted rotated by 90°: user x runs along device rows
//! (128 of them) and user y along device columns (64).

use core::fmt;

/// Device columns per page (user y span)
pub const DEVICE_WIDTH: usize = 64;

/// Device rows (user x span)
pub const DEVICE_HEIGHT: usize = 128;

/// Number of 8-row pages
pub const PAGES: usize = DEVICE_HEIGHT / 8;

/// Framebuffer size in bytes
pub const BUFFER_LEN: usize = (DEVICE_WIDTH * DEVICE_HEIGHT) / 8;

/// Byte index of user pixel `(x, y)`
///
/// Swaps the axes, wraps each into its span (negative values wrap from
/// the far edge), then addresses the page byte.
pub const fn to_device_index(x: i32, y: i32) -> usize {
    let column = y.rem_euclid(DEVICE_WIDTH as i32) as usize;
    let row = x.rem_euclid(DEVICE_HEIGHT as i32) as usize;
    (column + (row / 8) * DEVICE_WIDTH) % BUFFER_LEN
}

/// Bit mask of user pixel `(x, _)` within its byte
///
/// Only the user x coordinate selects the bit.
pub const fn pixel_mask(x: i32) -> u8 {
    let row = x.rem_euclid(DEVICE_HEIGHT as i32) as u32;
    1 << (row & 7)
}

/// In-memory mirror of the panel's pixel memory
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    bytes: [u8; BUFFER_LEN],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::blank()
    }
}

impl Framebuffer {
    /// All pixels dark
    pub const fn blank() -> Self {
        Self {
            bytes: [0; BUFFER_LEN],
        }
    }

    /// Build a framebuffer from raw device bytes
    ///
    /// Copies at most [`BUFFER_LEN`] bytes; the rest stays dark.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut fb = Self::blank();
        let len = data.len().min(BUFFER_LEN);
        fb.bytes[..len].copy_from_slice(&data[..len]);
        fb
    }

    /// Raw device bytes
    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.bytes
    }

    /// The 64 column bytes of one page
    ///
    /// # Panics
    /// If `page >= PAGES`.
    pub fn page(&self, page: usize) -> &[u8] {
        let start = page * DEVICE_WIDTH;
        &self.bytes[start..start + DEVICE_WIDTH]
    }

    /// Iterate pages top to bottom
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(DEVICE_WIDTH)
    }

    /// Light the pixel at user `(x, y)`
    ///
    /// There is no clear counterpart: pixels only go dark through a
    /// fresh buffer.
    pub fn set(&mut self, x: i32, y: i32) {
        self.bytes[to_device_index(x, y)] |= pixel_mask(x);
    }

    /// Whether the pixel at user `(x, y)` is lit
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.bytes[to_device_index(x, y)] & pixel_mask(x) != 0
    }

    /// Number of lit pixels
    pub fn lit_pixels(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    /// Whether no pixel is lit
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("lit_pixels", &self.lit_pixels())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer({} lit)", self.lit_pixels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(BUFFER_LEN, 1024);
        assert_eq!(PAGES, 16);
        assert_eq!(Framebuffer::blank().pages().count(), PAGES);
    }

    #[test]
    fn test_index_swaps_axes() {
        // user y selects the column within a page
        assert_eq!(to_device_index(0, 0), 0);
        assert_eq!(to_device_index(0, 5), 5);
        // user x selects the page (8 rows each) and the bit
        assert_eq!(to_device_index(8, 0), 64);
        assert_eq!(to_device_index(9, 3), 67);
        assert_eq!(pixel_mask(9), 0b10);
        assert_eq!(to_device_index(127, 63), BUFFER_LEN - 1);
        assert_eq!(pixel_mask(127), 0x80);
    }

    #[test]
    fn test_index_wraps_negative_and_overflow() {
        assert_eq!(to_device_index(-1, 0), to_device_index(127, 0));
        assert_eq!(to_device_index(0, -1), to_device_index(0, 63));
        assert_eq!(to_device_index(128, 64), to_device_index(0, 0));
        assert_eq!(pixel_mask(-1), pixel_mask(127));
        assert_eq!(to_device_index(i32::MIN, i32::MAX), to_device_index(0, 63));
    }

    #[test]
    fn test_from_bytes_pads_short_input() {
        let fb = Framebuffer::from_bytes(&[0xFF; 10]);
        assert!(fb.as_bytes()[..10].iter().all(|&b| b == 0xFF));
        assert!(fb.as_bytes()[10..].iter().all(|&b| b == 0));
        assert_eq!(fb.lit_pixels(), 80);
    }

    #[test]
    fn test_from_bytes_truncates_long_input() {
        let data: [u8; 2000] = core::array::from_fn(|i| (i % 251) as u8 + 1);
        let fb = Framebuffer::from_bytes(&data);
        assert_eq!(fb.as_bytes()[..], data[..BUFFER_LEN]);
    }

    #[test]
    fn test_set_and_query() {
        let mut fb = Framebuffer::blank();
        assert!(fb.is_blank());
        fb.set(10, 20);
        assert!(fb.is_set(10, 20));
        assert!(!fb.is_set(20, 10));
        assert_eq!(fb.lit_pixels(), 1);
        // the lit byte lives in page 1, column 20, bit 2
        assert_eq!(fb.page(1)[20], 0b100);
    }
}
