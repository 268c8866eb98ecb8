//! Startup sweep
//!
//! A bar grows left to right in 8-pixel blocks, then the panel is
//! cleared. Frames are produced lazily; the façade commits them one by
//! one and checks for cancellation between them.

use sh110x_gfx::{fill_rect, Framebuffer};

/// Blocks in the sweep
pub const SWEEP_BLOCKS: i32 = 14;

/// Frames in the sweep, including the closing blank frame
pub const FRAME_COUNT: usize = SWEEP_BLOCKS as usize + 1;

const BLOCK_WIDTH: i32 = 8;
const BAR_Y: i32 = 20;
const BAR_HEIGHT: i32 = 24;

/// How a startup animation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationOutcome {
    /// Every frame was committed
    Completed,
    /// Cancel was signalled after `frames` frames
    Cancelled { frames: usize },
    /// A commit failed after `frames` good frames
    Failed { frames: usize },
}

/// Iterator over the startup frames
#[derive(Debug, Clone)]
pub struct StartupAnimation {
    canvas: Framebuffer,
    block: i32,
}

impl StartupAnimation {
    /// Sweep starting from a blank panel
    pub fn new() -> Self {
        Self {
            canvas: Framebuffer::blank(),
            block: 1,
        }
    }
}

impl Default for StartupAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for StartupAnimation {
    type Item = Framebuffer;

    fn next(&mut self) -> Option<Framebuffer> {
        match self.block {
            b if b <= SWEEP_BLOCKS => {
                fill_rect(&mut self.canvas, b * BLOCK_WIDTH, BAR_Y, BLOCK_WIDTH, BAR_HEIGHT);
                self.block += 1;
                Some(self.canvas.clone())
            }
            b if b == SWEEP_BLOCKS + 1 => {
                self.block += 1;
                Some(Framebuffer::blank())
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (SWEEP_BLOCKS + 2 - self.block).max(0) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for StartupAnimation {}
