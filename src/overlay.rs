//! Debug rendering of discovered spaces on top of a video still.
use crate::error::{Result, SpaceError};
use crate::io::ensure_parent_dir;
use crate::types::ParkingSpace;
use image::{Rgb, RgbImage};
use std::path::Path;

pub const SPACE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

const CROSS_HALF: i64 = 3;

/// Draw each space's circle outline and a small cross at its center.
///
/// Radii are capped at the canvas diagonal; spaces whose circle lies
/// entirely off the canvas, or with non-finite geometry, are skipped.
pub fn draw_spaces(canvas: &mut RgbImage, spaces: &[ParkingSpace], color: Rgb<u8>) {
    let w = f64::from(canvas.width());
    let h = f64::from(canvas.height());
    let max_r = w.hypot(h).ceil();
    for space in spaces {
        if !(space.cx.is_finite() && space.cy.is_finite() && space.radius.is_finite()) {
            continue;
        }
        let r = space.radius.round().clamp(1.0, max_r.max(1.0));
        if space.cx + r < 0.0 || space.cy + r < 0.0 || space.cx - r >= w || space.cy - r >= h {
            continue;
        }
        let cx = space.cx.round() as i64;
        let cy = space.cy.round() as i64;
        draw_circle(canvas, cx, cy, r as i64, color);
        for d in -CROSS_HALF..=CROSS_HALF {
            put(canvas, cx + d, cy, color);
            put(canvas, cx, cy + d, color);
        }
    }
}

/// Load `frame`, draw `spaces` on it and save the result to `out`.
pub fn save_overlay(frame: &Path, spaces: &[ParkingSpace], out: &Path) -> Result<()> {
    let mut canvas = image::open(frame)
        .map_err(|source| SpaceError::Image {
            path: frame.to_path_buf(),
            source,
        })?
        .into_rgb8();
    draw_spaces(&mut canvas, spaces, SPACE_COLOR);
    ensure_parent_dir(out)?;
    canvas.save(out).map_err(|source| SpaceError::Image {
        path: out.to_path_buf(),
        source,
    })
}

// Midpoint circle, one pixel thick.
fn draw_circle(canvas: &mut RgbImage, cx: i64, cy: i64, r: i64, color: Rgb<u8>) {
    let mut x = r;
    let mut y = 0i64;
    let mut err = 1 - r;
    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            put(canvas, cx + dx, cy + dy, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn put(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    canvas.put_pixel(x as u32, y as u32, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_touches_its_extremes() {
        let mut canvas = RgbImage::new(64, 64);
        draw_spaces(&mut canvas, &[ParkingSpace::new(32.0, 32.0, 10.0)], SPACE_COLOR);
        for (x, y) in [(42, 32), (22, 32), (32, 42), (32, 22), (32, 32)] {
            assert_eq!(*canvas.get_pixel(x, y), SPACE_COLOR, "pixel ({x}, {y})");
        }
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn extreme_geometry_is_bounded() {
        let mut canvas = RgbImage::new(16, 16);
        let spaces = [
            ParkingSpace::new(1.0e300, 1.0e300, 1.0e300),
            ParkingSpace::new(-1.0e300, 8.0, 5.0),
            ParkingSpace::new(f64::NAN, 8.0, 5.0),
            ParkingSpace::new(8.0, 8.0, 1.0e12),
        ];
        draw_spaces(&mut canvas, &spaces, SPACE_COLOR);
        // Only the last space reaches the canvas; its radius is capped so the
        // outline falls outside and the center cross remains.
        assert_eq!(*canvas.get_pixel(8, 8), SPACE_COLOR);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(15, 15), Rgb([0, 0, 0]));
    }

    #[test]
    fn spaces_off_canvas_are_clipped() {
        let mut canvas = RgbImage::new(16, 16);
        draw_spaces(&mut canvas, &[ParkingSpace::new(-50.0, 200.0, 30.0)], SPACE_COLOR);
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
