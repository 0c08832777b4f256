// Error type for the pixel scaffold.
// Every variant states *where* things went wrong. All of them are fatal:
// they either stop startup or stop the frame loop.

/// Errors surfaced by buffer creation, the upload copy and the surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Zero-sized or overflowing buffer dimensions.
    #[error("invalid buffer size {width}x{height}")]
    InvalidSize { width: usize, height: usize },
    /// The pixel allocation itself failed.
    #[error("pixel buffer allocation failed: {0}")]
    BufferAlloc(#[from] std::collections::TryReserveError),
    /// Destination of the End-phase copy cannot hold the buffer.
    #[error("pitch {pitch} invalid for row of {row_bytes} bytes ({len} byte destination)")]
    Pitch {
        pitch: usize,
        row_bytes: usize,
        len: usize,
    },
    /// Lock/unlock/present used out of order.
    #[error("surface error: {0}")]
    Surface(String),
    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),
    /// Pushing the texture to the window failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
