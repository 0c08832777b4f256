// What you SEE:
// • A black window of the configured size.
// • A crosshair orbiting the center, advanced by each frame's delta time,
//   joined to the center by a thin line.
// • ESC or closing the window quits after the current frame is shown.

use anyhow::Result;
use clap::Parser;
use pixel_frame::draw::{draw_crosshair, draw_line};
use pixel_frame::math::{TAU, Vec2};
use pixel_frame::{FrameLoop, SurfaceConfig, WindowSurface, rgb};
use tracing_subscriber::EnvFilter;

const ORBIT_SPEED: f32 = 0.25 * TAU; // radians per second

fn main() -> Result<()> {
    let config = SurfaceConfig::parse();

    let filter = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    tracing::info!(title = %config.title, "pixel-frame starting");

    /* --- Surface + buffer setup ---
       Any failure here ends the process before the first frame. */
    let surface = WindowSurface::new(&config)?;
    let mut frames = FrameLoop::new(surface)?;

    let (w, h) = config.render_size();
    let center = Vec2::new(w as f32 / 2.0, h as f32 / 2.0);
    let radius = w.min(h) as f32 * 0.35;
    let mut angle = 0.0f32;

    /* ------------------------------ Main loop ------------------------------ */
    let presented = frames.run(|buf, state| {
        angle = (angle + ORBIT_SPEED * state.dt as f32) % TAU;
        let tip = center + Vec2::from_angle(angle) * radius;

        draw_line(buf, center, tip, rgb(0x40, 0x40, 0x40));
        draw_crosshair(buf, tip, 12.0, rgb(0xFF, 0xCC, 0x33));
    })?;

    tracing::info!(presented, "pixel-frame exiting");
    Ok(())
}
