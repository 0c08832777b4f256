// The CPU-side pixel buffer: the only mutable render target.
// Created once at startup sized to the surface texture; dropped once at shutdown.

use crate::error::{Error, Result};

/// Pack 8-bit channels as 0x00RRGGBB (the minifb pixel layout).
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Fixed-size grid of packed 32-bit colors, row-major (`y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Allocate a zeroed (black) buffer.
    ///
    /// Zero dimensions and allocation failure are startup errors.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&n| n > 0 && n.checked_mul(4).is_some())
            .ok_or(Error::InvalidSize { width, height })?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len)?;
        pixels.resize(len, 0);

        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes in one source row (`width * 4`).
    pub fn row_bytes(&self) -> usize {
        self.width * 4
    }

    /// Set every pixel to black.
    #[inline]
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write `color` at (x,y).
    ///
    /// The caller must keep `x < width` and `y < height`. Debug builds assert
    /// it; release builds only rely on slice indexing, so an out-of-range `x`
    /// silently lands in another row.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        debug_assert!(
            x < self.width && y < self.height,
            "set_pixel({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = color;
    }

    /// Read the pixel at (x,y), or `None` outside the buffer.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Copy the whole buffer into a locked upload region whose rows are
    /// `pitch` bytes apart. Only the first `width * 4` bytes of each
    /// destination row are written; padding is left alone.
    pub fn copy_to_pitched(&self, dst: &mut [u8], pitch: usize) -> Result<()> {
        let row_bytes = self.row_bytes();
        let needed = pitch
            .checked_mul(self.height - 1)
            .and_then(|n| n.checked_add(row_bytes));

        match needed {
            Some(needed) if pitch >= row_bytes && dst.len() >= needed => {}
            _ => {
                return Err(Error::Pitch {
                    pitch,
                    row_bytes,
                    len: dst.len(),
                });
            }
        }

        for (y, row) in self.rows().enumerate() {
            let start = y * pitch;
            dst[start..start + row_bytes].copy_from_slice(bytemuck::cast_slice(row));
        }
        Ok(())
    }
}
