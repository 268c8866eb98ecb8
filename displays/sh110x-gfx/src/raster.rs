//! Pixel, line and rectangle rasterization
//!
//! All primitives take user coordinates and wrap them through
//! [`Framebuffer::set`]; none of them clip or fail.

use crate::framebuffer::Framebuffer;

/// Light one pixel
pub fn set_pixel(fb: &mut Framebuffer, x: i32, y: i32) {
    fb.set(x, y);
}

/// Draw a line with Bresenham's algorithm
///
/// Endpoints are inclusive and order-independent: the walk always runs
/// along the major axis from the smaller coordinate.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32) {
    // i64 keeps the deltas of far-apart i32 endpoints from overflowing
    let (mut x0, mut y0, mut x1, mut y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        core::mem::swap(&mut x0, &mut y0);
        core::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        core::mem::swap(&mut x0, &mut x1);
        core::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };
    let mut err = dx / 2;

    // every visited coordinate lies between two i32 endpoints
    let mut y = y0;
    for x in x0..=x1 {
        if steep {
            fb.set(y as i32, x as i32);
        } else {
            fb.set(x as i32, y as i32);
        }
        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
    }
}

/// Fill a rectangle as `w` vertical lines
///
/// Column `i` runs from `y` to `y + h` inclusive. Large `h` wraps around
/// the axis like any other coordinate.
pub fn fill_rect(fb: &mut Framebuffer, x: i32, y: i32, w: i32, h: i32) {
    for i in x..x.saturating_add(w) {
        draw_line(fb, i, y, i, y.saturating_add(h));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Framebuffer {
        let mut fb = Framebuffer::blank();
        draw_line(&mut fb, x0, y0, x1, y1);
        fb
    }

    #[test]
    fn test_degenerate_line_is_one_pixel() {
        let fb = line(5, 5, 5, 5);
        assert_eq!(fb.lit_pixels(), 1);
        assert!(fb.is_set(5, 5));
    }

    #[test]
    fn test_horizontal_line() {
        let fb = line(20, 10, 100, 10);
        assert_eq!(fb.lit_pixels(), 81);
        assert!((20..=100).all(|x| fb.is_set(x, 10)));
        assert!(!fb.is_set(19, 10));
        assert!(!fb.is_set(101, 10));
    }

    #[test]
    fn test_steep_line_visits_every_row() {
        let fb = line(3, 0, 5, 40);
        assert_eq!(fb.lit_pixels(), 41);
        for y in 0..=40 {
            assert!((3..=5).any(|x| fb.is_set(x, y)), "row {y}");
        }
    }

    #[test]
    fn test_diagonal_line() {
        let fb = line(0, 0, 7, 7);
        assert_eq!(fb.lit_pixels(), 8);
        assert!((0..8).all(|i| fb.is_set(i, i)));
    }

    #[test]
    fn test_shallow_line_steps_perpendicular() {
        // dx = 4, dy = 2: err starts at 2, y steps after the 2nd and 4th pixel
        let fb = line(0, 0, 4, 2);
        for (x, y) in [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)] {
            assert!(fb.is_set(x, y), "({x}, {y})");
        }
        assert_eq!(fb.lit_pixels(), 5);
    }

    #[test]
    fn test_line_wraps_past_edge() {
        let fb = line(120, 0, 135, 0);
        assert!(fb.is_set(127, 0));
        assert!(fb.is_set(0, 0));
        assert!(fb.is_set(7, 0));
        assert_eq!(fb.lit_pixels(), 16);
    }

    #[test]
    fn test_fill_rect_columns_are_inclusive() {
        let mut fb = Framebuffer::blank();
        fill_rect(&mut fb, 8, 20, 8, 24);
        assert_eq!(fb.lit_pixels(), 8 * 25);
        assert!(fb.is_set(8, 20) && fb.is_set(15, 44));
        assert!(!fb.is_set(16, 20) && !fb.is_set(8, 45));
    }

    #[test]
    fn test_fill_rect_empty_width() {
        let mut fb = Framebuffer::blank();
        fill_rect(&mut fb, 0, 0, 0, 10);
        fill_rect(&mut fb, 0, 0, -3, 10);
        assert!(fb.is_blank());
    }

    proptest! {
        #[test]
        fn prop_set_pixel_idempotent(x in any::<i32>(), y in any::<i32>()) {
            let mut once = Framebuffer::blank();
            set_pixel(&mut once, x, y);
            let mut twice = once.clone();
            set_pixel(&mut twice, x, y);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_set_pixel_is_periodic(x in -10_000i32..10_000, y in -10_000i32..10_000) {
            let mut a = Framebuffer::blank();
            set_pixel(&mut a, x, y);
            let mut b = Framebuffer::blank();
            set_pixel(&mut b, x + 128, y + 64);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_set_pixel_lights_exactly_one(x in any::<i32>(), y in any::<i32>()) {
            let mut fb = Framebuffer::blank();
            set_pixel(&mut fb, x, y);
            prop_assert_eq!(fb.lit_pixels(), 1);
            prop_assert!(fb.is_set(x, y));
        }

        #[test]
        fn prop_line_is_symmetric(
            x0 in -300i32..300, y0 in -300i32..300,
            x1 in -300i32..300, y1 in -300i32..300,
        ) {
            prop_assert_eq!(line(x0, y0, x1, y1), line(x1, y1, x0, y0));
        }

        #[test]
        fn prop_line_lights_both_endpoints(
            x0 in -300i32..300, y0 in -300i32..300,
            x1 in -300i32..300, y1 in -300i32..300,
        ) {
            let fb = line(x0, y0, x1, y1);
            prop_assert!(fb.is_set(x0, y0));
            prop_assert!(fb.is_set(x1, y1));
        }
    }
}
