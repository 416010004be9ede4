// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Configuration management for Client Treatment Organizer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Interface selection and window geometry
    #[serde(default)]
    pub interface: InterfaceConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InterfaceConfig {
    #[serde(default)]
    pub mode: InterfaceMode,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

/// How the presentation shell picks between window and console
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceMode {
    /// Use the window when a display is detected
    #[default]
    Auto,
    /// Always try the window, skipping display detection
    Gui,
    /// Never open a window
    Console,
}

impl fmt::Display for InterfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterfaceMode::Auto => "auto",
            InterfaceMode::Gui => "gui",
            InterfaceMode::Console => "console",
        };
        f.write_str(name)
    }
}

// Default value functions
fn default_window_width() -> f32 { 400.0 }
fn default_window_height() -> f32 { 300.0 }

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            mode: InterfaceMode::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::OrganizerError::Config(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration, logging and falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject window sizes egui cannot lay out
    pub fn validate(&self) -> crate::Result<()> {
        let iface = &self.interface;
        if !(iface.window_width.is_finite() && iface.window_width > 0.0)
            || !(iface.window_height.is_finite() && iface.window_height > 0.0)
        {
            return Err(crate::OrganizerError::Config(format!(
                "window size must be positive, got {}x{}",
                iface.window_width, iface.window_height
            )));
        }
        Ok(())
    }
}
