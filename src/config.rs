//! Startup configuration, consumed once by the presentation surface.

use crate::error::{Error, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pixel-frame", about = "CPU pixel-buffer rendering scaffold")]
pub struct SurfaceConfig {
    /// Window title
    #[arg(long, default_value = "template")]
    pub title: String,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Pixel buffer width (defaults to the window width)
    #[arg(long)]
    pub render_width: Option<usize>,

    /// Pixel buffer height (defaults to the window height)
    #[arg(long)]
    pub render_height: Option<usize>,

    /// Borderless, topmost window
    #[arg(long)]
    pub fullscreen: bool,

    /// Frame rate cap, 0 for uncapped
    #[arg(long, default_value_t = 60)]
    pub target_fps: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            title: "template".into(),
            width: 800,
            height: 600,
            render_width: None,
            render_height: None,
            fullscreen: false,
            target_fps: 60,
            verbose: false,
        }
    }
}

impl SurfaceConfig {
    /// Size of the pixel buffer and surface texture.
    pub fn render_size(&self) -> (usize, usize) {
        (
            self.render_width.unwrap_or(self.width),
            self.render_height.unwrap_or(self.height),
        )
    }

    /// Reject zero window or render dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        let (width, height) = self.render_size();
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize { width, height });
        }
        Ok(())
    }
}
