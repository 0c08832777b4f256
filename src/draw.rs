// Clipped drawing helpers on top of the pixel buffer.
// Unlike `PixelBuffer::set_pixel`, these accept any coordinate and drop
// whatever falls outside the buffer, so shapes can cross the edges.

use crate::math::Vec2;
use crate::types::PixelBuffer;

/// Put a pixel if (x,y) is inside the buffer.
#[inline]
pub fn put_pixel(fb: &mut PixelBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x < fb.width() && y < fb.height() {
        fb.set_pixel(x, y, color);
    }
}

/// Line from `a` to `b` in pixel space, both ends inclusive.
///
/// Endpoints snap to the nearest pixel, then the line is stepped one pixel
/// along its major axis at a time.
pub fn draw_line(fb: &mut PixelBuffer, a: Vec2, b: Vec2, color: u32) {
    let a = snap(a);
    let b = snap(b);
    let span = b - a;
    let steps = span.x.abs().max(span.y.abs());
    if steps == 0.0 {
        put_pixel(fb, a.x as i32, a.y as i32, color);
        return;
    }
    let inc = span / steps;
    for i in 0..=steps as u32 {
        let p = snap(a + inc * i as f32);
        put_pixel(fb, p.x as i32, p.y as i32, color);
    }
}

/// "+" centered on `center` with arms of `size` pixels and a 1-pixel gap
/// around the center dot.
pub fn draw_crosshair(fb: &mut PixelBuffer, center: Vec2, size: f32, color: u32) {
    let c = snap(center);
    for dir in [
        Vec2::new(1.0, 0.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, -1.0),
    ] {
        draw_line(fb, c + dir * 2.0, c + dir * size, color);
    }
    put_pixel(fb, c.x as i32, c.y as i32, color);
}

#[inline]
fn snap(v: Vec2) -> Vec2 {
    Vec2::new(v.x.round(), v.y.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(fb: &PixelBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y) != Some(0) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn put_pixel_clips_outside() {
        let mut fb = PixelBuffer::new(4, 4).unwrap();
        put_pixel(&mut fb, -1, 0, 1);
        put_pixel(&mut fb, 0, -1, 1);
        put_pixel(&mut fb, 4, 0, 1);
        put_pixel(&mut fb, 0, 4, 1);
        assert!(lit(&fb).is_empty());
        put_pixel(&mut fb, 3, 3, 1);
        assert_eq!(lit(&fb), vec![(3, 3)]);
    }

    #[test]
    fn diagonal_line_hits_both_ends() {
        let mut fb = PixelBuffer::new(5, 5).unwrap();
        draw_line(&mut fb, Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0), 0xFF);
        assert_eq!(lit(&fb), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn line_crossing_the_edge_is_clipped() {
        let mut fb = PixelBuffer::new(3, 1).unwrap();
        draw_line(&mut fb, Vec2::new(-5.0, 0.0), Vec2::new(10.0, 0.0), 0xFF);
        assert_eq!(lit(&fb), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn line_rounds_endpoints() {
        let mut fb = PixelBuffer::new(4, 2).unwrap();
        draw_line(&mut fb, Vec2::new(0.4, 0.6), Vec2::new(2.6, 0.6), 1);
        assert_eq!(lit(&fb), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn steep_line_has_one_pixel_per_row() {
        let mut fb = PixelBuffer::new(3, 5).unwrap();
        draw_line(&mut fb, Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0), 1);
        let pts = lit(&fb);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts.first(), Some(&(0, 0)));
        assert_eq!(pts.last(), Some(&(2, 4)));
        for y in 0..5 {
            assert_eq!(pts.iter().filter(|p| p.1 == y).count(), 1);
        }
    }

    #[test]
    fn zero_length_line_is_a_dot() {
        let mut fb = PixelBuffer::new(3, 3).unwrap();
        draw_line(&mut fb, Vec2::new(1.2, 0.9), Vec2::new(0.8, 1.1), 1);
        assert_eq!(lit(&fb), vec![(1, 1)]);
    }

    #[test]
    fn crosshair_leaves_gap_around_center() {
        let mut fb = PixelBuffer::new(9, 9).unwrap();
        draw_crosshair(&mut fb, Vec2::new(4.0, 4.0), 3.0, 1);
        assert_eq!(fb.get_pixel(4, 4), Some(1));
        assert_eq!(fb.get_pixel(3, 4), Some(0));
        assert_eq!(fb.get_pixel(5, 4), Some(0));
        assert_eq!(fb.get_pixel(4, 1), Some(1));
        assert_eq!(fb.get_pixel(7, 4), Some(1));
        assert_eq!(lit(&fb).len(), 9);
    }

    #[test]
    fn crosshair_center_rounds_like_line_ends() {
        let mut fb = PixelBuffer::new(9, 9).unwrap();
        draw_crosshair(&mut fb, Vec2::new(3.6, 4.4), 3.0, 1);
        assert_eq!(fb.get_pixel(4, 4), Some(1));
        assert_eq!(fb.get_pixel(3, 4), Some(0));
    }
}
