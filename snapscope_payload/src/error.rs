// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a [`Payload`](crate::Payload).
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The document is not valid payload JSON (including a missing `nodes` array).
    #[error("Invalid hierarchy payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload file could not be read.
    #[error("Failed to read payload {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
