// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Error types for Client Treatment Organizer

use thiserror::Error;

/// Result type alias for organizer operations
pub type Result<T> = std::result::Result<T, OrganizerError>;

/// Organizer error types
#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("Failed to open {url}: {reason}")]
    Open { url: String, reason: String },
}
