// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use thiserror::Error;

/// Failure of one remote procedure call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status and an `{"error": ...}` body.
    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Server { status: 404, .. })
    }
}
