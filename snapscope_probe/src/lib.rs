// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapscope Probe: screenshot dimensions without decoding pixels.
//!
//! Hierarchy rectangles are in device pixels, so a viewer needs the pixel size
//! of the screenshot taken with a capture to scale the overlay onto it. The
//! probe reads just enough of the image header to learn that size. The work
//! runs on Tokio's blocking pool, so the futures can be awaited from UI or
//! server tasks without stalling the executor.
//!
//! PNG, JPEG, WebP, BMP, and GIF are recognized by content, not by extension.
//!
//! There is exactly one attempt per call: no retry and no timeout. Dropping
//! the future abandons the result; the header read itself is short and runs
//! to completion on the worker.
//!
//! ```no_run
//! # async fn run() -> Result<(), snapscope_probe::ProbeError> {
//! let size = snapscope_probe::probe_path("capture/screen.png").await?;
//! println!("{}x{}", size.width, size.height);
//! # Ok(())
//! # }
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;

/// Pixel dimensions of an image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Failure to probe an image.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The image file could not be opened or read.
    #[error("Failed to read image {}: {source}", .path.display())]
    Io {
        /// File that was being probed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The data is not an image in a supported format.
    #[error("Failed to decode image header: {0}")]
    Decode(#[from] image::ImageError),

    /// The blocking worker panicked or was cancelled by runtime shutdown.
    #[error("Image probe worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Read the pixel size of the image file at `path`.
pub async fn probe_path(path: impl AsRef<Path>) -> Result<ImageSize, ProbeError> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || read_path(&path)).await?
}

/// Read the pixel size of an encoded image held in memory.
pub async fn probe_bytes(bytes: impl Into<Vec<u8>>) -> Result<ImageSize, ProbeError> {
    let bytes = bytes.into();
    tokio::task::spawn_blocking(move || read_bytes(bytes)).await?
}

fn read_path(path: &Path) -> Result<ImageSize, ProbeError> {
    let io_err = |source| ProbeError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;
    let size = ImageSize::from(reader.into_dimensions()?);
    tracing::debug!(path = %path.display(), width = size.width, height = size.height, "probed image");
    Ok(size)
}

fn read_bytes(bytes: Vec<u8>) -> Result<ImageSize, ProbeError> {
    let len = bytes.len();
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let size = ImageSize::from(reader.into_dimensions()?);
    tracing::debug!(len, width = size.width, height = size.height, "probed image bytes");
    Ok(size)
}
