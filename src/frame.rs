//! Frame lifecycle: Begin (clear) → Populate (caller draws) → End (upload + present).
//!
//! [`FrameLoop`] is the context object for a run. It owns the surface, the
//! pixel buffer and the clock; dropping it releases all three, whichever way
//! the loop exits. Quit is polled once per cycle and only ends the loop after
//! that cycle's End, so a started frame always reaches the screen.

use crate::clock::{Clock, MonotonicTicks, TickSource};
use crate::error::Result;
use crate::surface::Surface;
use crate::types::PixelBuffer;

/// Per-frame data handed to drawing code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Seconds since the previous frame started. For the first frame, seconds
    /// since the loop was created.
    pub dt: f64,
    /// Index of this frame, starting at 0.
    pub frame: u64,
}

/// Where the loop is inside the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No frame started yet.
    Idle,
    /// Buffer cleared, drawing may write pixels.
    Populate,
    /// Buffer uploaded and shown.
    Presented,
}

pub struct FrameLoop<S, T = MonotonicTicks> {
    surface: S,
    buffer: PixelBuffer,
    clock: Clock<T>,
    phase: Phase,
    frames: u64,
}

impl<S: Surface> FrameLoop<S> {
    /// Loop timed by the monotonic clock.
    pub fn new(surface: S) -> Result<Self> {
        Self::with_ticks(surface, MonotonicTicks::new())
    }
}

impl<S: Surface, T: TickSource> FrameLoop<S, T> {
    /// Allocate a buffer matching the surface texture and start the clock.
    pub fn with_ticks(surface: S, ticks: T) -> Result<Self> {
        let (width, height) = surface.size();
        let buffer = PixelBuffer::new(width, height)?;
        tracing::debug!(width, height, "pixel buffer allocated");
        Ok(Self {
            surface,
            buffer,
            clock: Clock::new(ticks),
            phase: Phase::Idle,
            frames: 0,
        })
    }

    /// Begin: clear the buffer so undrawn pixels are black.
    pub fn begin(&mut self) -> &mut PixelBuffer {
        debug_assert_ne!(self.phase, Phase::Populate, "begin inside an open frame");
        self.buffer.clear();
        self.phase = Phase::Populate;
        &mut self.buffer
    }

    /// End: copy the buffer into the locked texture at its pitch, unlock,
    /// then present. The texture is unlocked even when the copy fails.
    pub fn end(&mut self) -> Result<()> {
        debug_assert_eq!(self.phase, Phase::Populate, "end without begin");
        let region = self.surface.lock()?;
        let copied = self.buffer.copy_to_pitched(region.pixels, region.pitch);
        self.surface.unlock()?;
        copied?;
        self.surface.present()?;
        self.phase = Phase::Presented;
        self.frames += 1;
        Ok(())
    }

    /// Run one full cycle. Returns true if quit was requested during it.
    pub fn step<F>(&mut self, draw: &mut F) -> Result<bool>
    where
        F: FnMut(&mut PixelBuffer, &FrameState),
    {
        let state = FrameState {
            dt: self.clock.tick(),
            frame: self.frames,
        };
        let quit = self.surface.quit_requested();

        let buffer = self.begin();
        draw(buffer, &state);
        self.end()?;

        tracing::trace!(frame = state.frame, dt = state.dt, "frame presented");
        Ok(quit)
    }

    /// Cycle until the surface reports quit. Returns the number of frames
    /// presented by this call. Any surface error ends the loop.
    pub fn run<F>(&mut self, mut draw: F) -> Result<u64>
    where
        F: FnMut(&mut PixelBuffer, &FrameState),
    {
        let start = self.frames;
        while !self.step(&mut draw)? {}
        let frames = self.frames - start;
        tracing::info!(frames, "quit requested, frame loop stopped");
        Ok(frames)
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tear down, handing back the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
