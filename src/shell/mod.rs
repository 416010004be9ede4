// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Presentation shell: welcome window when a GUI is available, console prompt otherwise

pub mod capability;
pub mod console;
#[cfg(feature = "gui")]
mod gui;
pub mod window;

use std::io::{BufRead, Write};
use tracing::{info, warn};

pub use capability::{GuiCapability, GuiHandle, Unavailable};
pub use window::{Control, LoopControl, WelcomeWindow, WindowSpec};

use crate::config::AppConfig;
use crate::opener::{SystemOpener, UrlOpener};

/// Interaction mode the shell ran in before terminating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    GuiShown,
    ConsoleWait,
}

/// Chooses between the welcome window and the console prompt
pub struct PresentationShell {
    window: WelcomeWindow,
    opener: Box<dyn UrlOpener>,
}

impl PresentationShell {
    pub fn new(window: WelcomeWindow, opener: Box<dyn UrlOpener>) -> Self {
        Self { window, opener }
    }

    /// Shell sized from config, opening links with the system launcher
    pub fn from_config(config: &AppConfig) -> Self {
        let spec = WindowSpec {
            width: config.interface.window_width,
            height: config.interface.window_height,
        };
        Self::new(WelcomeWindow::new(spec), Box::new(SystemOpener))
    }

    /// Block until the user dismisses the window or presses Enter.
    ///
    /// A window that fails to start is treated like a missing GUI.
    pub fn run<R: BufRead, W: Write>(
        self,
        capability: GuiCapability,
        input: &mut R,
        output: &mut W,
    ) -> ShellMode {
        match capability {
            GuiCapability::Available(handle) => {
                info!("Showing welcome window");
                match handle.launch(self.window, self.opener) {
                    Ok(()) => {
                        info!("Welcome window closed");
                        return ShellMode::GuiShown;
                    }
                    Err(e) => warn!("{}; falling back to console", e),
                }
            }
            GuiCapability::Unavailable(reason) => {
                info!("GUI unavailable ({}), running in console mode", reason);
            }
        }

        if let Err(e) = console::wait_for_enter(input, output) {
            warn!("Console wait ended early: {}", e);
        }
        ShellMode::ConsoleWait
    }
}
