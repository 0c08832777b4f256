// minifb window as a presentation surface.
// What you see: a window of the configured size showing the streaming texture,
// stretched when the render size differs from the window size.

use crate::config::SurfaceConfig;
use crate::error::{Error, Result};
use crate::surface::{LockedRegion, Surface};
use minifb::{Key, ScaleMode, Window, WindowOptions};

pub struct WindowSurface {
    window: Window,            // the on-screen window
    texture: Vec<u32>,         // streaming upload target, 0x00RRGGBB
    width: usize,              // texture size, not window size
    height: usize,
    locked: bool,
}

impl WindowSurface {
    /// Open the window and allocate a texture of the render size.
    pub fn new(config: &SurfaceConfig) -> Result<Self> {
        config.validate()?;
        let (width, height) = config.render_size();

        let options = WindowOptions {
            borderless: config.fullscreen,
            topmost: config.fullscreen,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        };
        let mut window = Window::new(&config.title, config.width, config.height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(config.target_fps);

        let len = width
            .checked_mul(height)
            .ok_or(Error::InvalidSize { width, height })?;
        let mut texture = Vec::new();
        texture.try_reserve_exact(len)?;
        texture.resize(len, 0);

        tracing::debug!(
            window_width = config.width,
            window_height = config.height,
            width,
            height,
            fullscreen = config.fullscreen,
            "window surface created"
        );

        Ok(Self {
            window,
            texture,
            width,
            height,
            locked: false,
        })
    }
}

impl Surface for WindowSurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn lock(&mut self) -> Result<LockedRegion<'_>> {
        if self.locked {
            return Err(Error::Surface("texture already locked".into()));
        }
        self.locked = true;
        Ok(LockedRegion {
            pixels: bytemuck::cast_slice_mut(&mut self.texture),
            pitch: self.width * 4,
        })
    }

    fn unlock(&mut self) -> Result<()> {
        if !self.locked {
            return Err(Error::Surface("unlock without lock".into()));
        }
        self.locked = false;
        Ok(())
    }

    /// Push the texture to the screen. This also pumps window events.
    fn present(&mut self) -> Result<()> {
        if self.locked {
            return Err(Error::Surface("present while texture is locked".into()));
        }
        self.window
            .update_with_buffer(&self.texture, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Closed window or ESC held.
    fn quit_requested(&mut self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }
}
