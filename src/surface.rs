//! Presentation surface contract.
//!
//! The frame loop only ever talks to a surface through [`Surface`]: lock the
//! upload target, copy rows at the reported pitch, unlock, present, and poll
//! for quit once per cycle.

use crate::error::{Error, Result};

/// Memory handed out by [`Surface::lock`]. Rows start every `pitch` bytes;
/// `pitch` may exceed `width * 4`.
#[derive(Debug)]
pub struct LockedRegion<'a> {
    pub pixels: &'a mut [u8],
    pub pitch: usize,
}

/// A window (or stand-in) that accepts one uploaded frame per cycle.
pub trait Surface {
    /// Size of the upload target in pixels. The pixel buffer matches it.
    fn size(&self) -> (usize, usize);

    /// Lock the upload target for writing.
    fn lock(&mut self) -> Result<LockedRegion<'_>>;

    /// Release the lock taken by [`Surface::lock`].
    fn unlock(&mut self) -> Result<()>;

    /// Make the uploaded content visible. Synchronous.
    fn present(&mut self) -> Result<()>;

    /// Poll pending events; true once the user asked to quit.
    fn quit_requested(&mut self) -> bool;
}

/// Byte written into padding and unwritten texture memory of a fresh
/// [`MemorySurface`].
pub const PADDING_FILL: u8 = 0xCD;

/// Headless surface backed by a byte vector with an explicit pitch.
#[derive(Debug)]
pub struct MemorySurface {
    width: usize,
    height: usize,
    pitch: usize,
    texture: Vec<u8>,
    locked: bool,
    presents: u64,
    polls: u64,
    quit_on_poll: Option<u64>,
}

impl MemorySurface {
    /// Texture with tightly packed rows (`pitch == width * 4`).
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_pitch(width, height, width.saturating_mul(4))
    }

    /// Texture whose rows are `pitch` bytes apart.
    pub fn with_pitch(width: usize, height: usize, pitch: usize) -> Result<Self> {
        let row_bytes = width.checked_mul(4);
        let len = pitch.checked_mul(height);
        match (row_bytes, len) {
            (Some(row_bytes), Some(len)) if width > 0 && height > 0 && pitch >= row_bytes => {
                Ok(Self {
                    width,
                    height,
                    pitch,
                    texture: vec![PADDING_FILL; len],
                    locked: false,
                    presents: 0,
                    polls: 0,
                    quit_on_poll: None,
                })
            }
            _ => Err(Error::InvalidSize { width, height }),
        }
    }

    /// Signal quit on the `n`-th call to `quit_requested` (1-based).
    pub fn quit_on_poll(mut self, n: u64) -> Self {
        self.quit_on_poll = Some(n);
        self
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Raw texture bytes, padding included.
    pub fn texture(&self) -> &[u8] {
        &self.texture
    }

    /// Pixel at (x,y) as last uploaded.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = y * self.pitch + x * 4;
        let bytes: [u8; 4] = self.texture[at..at + 4].try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn lock(&mut self) -> Result<LockedRegion<'_>> {
        if self.locked {
            return Err(Error::Surface("texture already locked".into()));
        }
        self.locked = true;
        Ok(LockedRegion {
            pixels: &mut self.texture,
            pitch: self.pitch,
        })
    }

    fn unlock(&mut self) -> Result<()> {
        if !self.locked {
            return Err(Error::Surface("unlock without lock".into()));
        }
        self.locked = false;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.locked {
            return Err(Error::Surface("present while texture is locked".into()));
        }
        self.presents += 1;
        Ok(())
    }

    fn quit_requested(&mut self) -> bool {
        self.polls += 1;
        self.quit_on_poll.is_some_and(|n| self.polls >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_smaller_than_row_is_rejected() {
        assert!(MemorySurface::with_pitch(4, 4, 15).is_err());
        assert!(MemorySurface::with_pitch(0, 4, 16).is_err());
        assert!(MemorySurface::with_pitch(4, 4, 16).is_ok());
    }

    #[test]
    fn lock_unlock_present_order_is_enforced() {
        let mut s = MemorySurface::new(2, 2).unwrap();
        assert!(s.unlock().is_err());

        let region = s.lock().unwrap();
        assert_eq!(region.pitch, 8);
        assert_eq!(region.pixels.len(), 16);
        assert!(s.is_locked());
        assert!(s.lock().is_err());
        assert!(s.present().is_err());

        s.unlock().unwrap();
        s.present().unwrap();
        assert_eq!(s.presents(), 1);
    }

    #[test]
    fn quit_fires_on_scheduled_poll() {
        let mut s = MemorySurface::new(1, 1).unwrap().quit_on_poll(3);
        assert!(!s.quit_requested());
        assert!(!s.quit_requested());
        assert!(s.quit_requested());
        assert_eq!(s.polls(), 3);
    }

    #[test]
    fn never_quits_without_schedule() {
        let mut s = MemorySurface::new(1, 1).unwrap();
        for _ in 0..10 {
            assert!(!s.quit_requested());
        }
    }

    #[test]
    fn fresh_texture_is_padding_fill() {
        let s = MemorySurface::with_pitch(1, 2, 8).unwrap();
        assert!(s.texture().iter().all(|&b| b == PADDING_FILL));
        assert_eq!(s.pixel(0, 1), Some(u32::from_ne_bytes([PADDING_FILL; 4])));
        assert_eq!(s.pixel(1, 0), None);
    }
}
