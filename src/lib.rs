// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Client Treatment Organizer
//!
//! Entry point library: a status banner plus a presentation shell that shows
//! a welcome window when a GUI is available and falls back to the console
//! otherwise.

pub mod banner;
pub mod config;
pub mod error;
pub mod opener;
pub mod shell;

pub use config::AppConfig;
pub use error::{OrganizerError, Result};

/// Application display name
pub const APP_NAME: &str = "Client Treatment Organizer";

/// Application version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project repository opened by the "Visit Repository" action
pub const REPOSITORY_URL: &str = "https://github.com/DrDisc/Client_treatment_Organizer";
