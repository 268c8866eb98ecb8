//! Framebuffer and rendering engine for sh110x OLED panels
//!
//! This crate provides:
//! - [`Framebuffer`], the 1024-byte bit-packed mirror of display RAM
//! - The coordinate transform from user space to device bytes
//! - Pixel, Bresenham line and filled-rectangle rasterization
//! - A proportional bitmap typeface and the string renderer
//!
//! Nothing here touches the bus. The driver crate clones the committed
//! framebuffer, draws on the copy with these functions, and pushes the
//! result to the panel.
//!
//! # Coordinates
//!
//! User coordinates put `(0, 0)` at the bottom-left with `+y` up. The
//! panel is mounted rotated, so x and y swap before addressing. Every
//! integer is a valid coordinate: values wrap around both axes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod font;
pub mod framebuffer;
pub mod raster;
pub mod text;

// Re-export key types
pub use font::{Font, Glyph, FONT};
pub use framebuffer::{
    pixel_mask, to_device_index, Framebuffer, BUFFER_LEN, DEVICE_HEIGHT, DEVICE_WIDTH, PAGES,
};
pub use raster::{draw_line, fill_rect, set_pixel};
pub use text::{render_string, text_width};
