// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Detecting whether a window can be shown on this host

use std::ffi::OsString;
use thiserror::Error;

use super::window::WelcomeWindow;
use crate::config::InterfaceMode;
use crate::opener::UrlOpener;
use crate::Result;

/// Outcome of probing the host for a GUI
#[derive(Debug)]
pub enum GuiCapability {
    Available(GuiHandle),
    Unavailable(Unavailable),
}

/// Why no window will be shown
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("built without the `gui` feature")]
    NotCompiled,

    #[error("console mode requested")]
    ConsoleRequested,

    #[error("no display server detected (DISPLAY and WAYLAND_DISPLAY are unset)")]
    NoDisplay,
}

/// Proof that the GUI probe succeeded; only `GuiCapability::probe*` builds one
#[derive(Debug)]
pub struct GuiHandle {
    _private: (),
}

impl GuiCapability {
    /// Probe using the process environment
    pub fn probe(mode: InterfaceMode) -> Self {
        Self::probe_with(mode, |key| std::env::var_os(key))
    }

    /// Probe with an injected environment lookup
    pub fn probe_with<F>(mode: InterfaceMode, env: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if mode == InterfaceMode::Console {
            return GuiCapability::Unavailable(Unavailable::ConsoleRequested);
        }
        if !cfg!(feature = "gui") {
            return GuiCapability::Unavailable(Unavailable::NotCompiled);
        }
        if mode == InterfaceMode::Auto && needs_display_server() && !has_display(&env) {
            return GuiCapability::Unavailable(Unavailable::NoDisplay);
        }
        GuiCapability::Available(GuiHandle { _private: () })
    }

    pub fn is_available(&self) -> bool {
        matches!(self, GuiCapability::Available(_))
    }
}

impl GuiHandle {
    /// Show the window and block until it is closed
    pub fn launch(self, window: WelcomeWindow, opener: Box<dyn UrlOpener>) -> Result<()> {
        #[cfg(feature = "gui")]
        {
            super::gui::launch(window, opener)
        }
        #[cfg(not(feature = "gui"))]
        {
            let _ = (window, opener);
            Err(crate::OrganizerError::Gui(Unavailable::NotCompiled.to_string()))
        }
    }
}

/// X11/Wayland hosts need a running display server; Windows and macOS always have one
fn needs_display_server() -> bool {
    cfg!(all(unix, not(target_os = "macos")))
}

fn has_display<F>(env: &F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|key| env(key).is_some_and(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "gui")]
    fn empty_env(_: &str) -> Option<OsString> {
        None
    }

    fn x11_env(key: &str) -> Option<OsString> {
        (key == "DISPLAY").then(|| OsString::from(":0"))
    }

    #[test]
    fn test_console_mode_is_unavailable() {
        match GuiCapability::probe_with(InterfaceMode::Console, x11_env) {
            GuiCapability::Unavailable(reason) => assert_eq!(reason, Unavailable::ConsoleRequested),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_display_var_is_ignored() {
        let blank = |key: &str| (key == "WAYLAND_DISPLAY").then(OsString::new);
        assert!(!has_display(&blank));
        assert!(has_display(&x11_env));
    }

    #[cfg(feature = "gui")]
    #[test]
    fn test_display_makes_gui_available() {
        assert!(GuiCapability::probe_with(InterfaceMode::Auto, x11_env).is_available());
    }

    #[cfg(feature = "gui")]
    #[test]
    fn test_gui_mode_skips_display_detection() {
        assert!(GuiCapability::probe_with(InterfaceMode::Gui, empty_env).is_available());
    }

    #[cfg(all(feature = "gui", unix, not(target_os = "macos")))]
    #[test]
    fn test_headless_auto_is_unavailable() {
        match GuiCapability::probe_with(InterfaceMode::Auto, empty_env) {
            GuiCapability::Unavailable(reason) => assert_eq!(reason, Unavailable::NoDisplay),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[cfg(not(feature = "gui"))]
    #[test]
    fn test_without_feature_is_unavailable() {
        assert!(matches!(
            GuiCapability::probe_with(InterfaceMode::Gui, x11_env),
            GuiCapability::Unavailable(Unavailable::NotCompiled)
        ));
    }
}
