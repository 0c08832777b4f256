//! CPU pixel-buffer rendering scaffold.
//!
//! A [`FrameLoop`] owns a [`PixelBuffer`] sized to a [`Surface`] texture and
//! runs clear → draw → present once per cycle, handing drawing code the
//! frame's delta time. [`math`] carries the vector kernel that drawing code
//! builds on; [`WindowSurface`] shows frames in a minifb window and
//! [`MemorySurface`] keeps them in memory for headless runs.

pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod frame;
pub mod math;
pub mod surface;
pub mod types;
pub mod window;

pub use clock::{Clock, FixedStepTicks, MonotonicTicks, TickSource, delta_seconds};
pub use config::SurfaceConfig;
pub use error::{Error, Result};
pub use frame::{FrameLoop, FrameState, Phase};
pub use math::{Vec2, Vec3};
pub use surface::{LockedRegion, MemorySurface, Surface};
pub use types::{PixelBuffer, rgb};
pub use window::WindowSurface;
