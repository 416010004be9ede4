// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Welcome window content, independent of the GUI toolkit

use tracing::{info, warn};

use crate::opener::UrlOpener;
use crate::{APP_NAME, REPOSITORY_URL, VERSION};

/// Features listed in the window body
pub const WINDOW_FEATURES: [&str; 4] = [
    "File manager integration",
    "Client organization tools",
    "Metadata management",
    "Automated file tracking",
];

/// Interactive controls, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    VisitRepository,
    Exit,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::VisitRepository => "Visit Repository",
            Control::Exit => "Exit",
        }
    }
}

/// What the event loop should do after a control fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Window geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self { width: 400.0, height: 300.0 }
    }
}

/// Fixed-content welcome window
#[derive(Debug, Clone, Default)]
pub struct WelcomeWindow {
    spec: WindowSpec,
}

impl WelcomeWindow {
    pub fn new(spec: WindowSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> WindowSpec {
        self.spec
    }

    /// Native title bar text
    pub fn window_title(&self) -> String {
        format!("{} v{}", APP_NAME, VERSION)
    }

    pub fn heading(&self) -> &'static str {
        APP_NAME
    }

    pub fn version_line(&self) -> String {
        format!("v{} - Initial Release", VERSION)
    }

    pub fn intro(&self) -> &'static str {
        "Core functionality is in development.\n\nCheck back soon for:"
    }

    pub fn features(&self) -> &'static [&'static str] {
        &WINDOW_FEATURES
    }

    /// The only interactive elements of the window
    pub fn controls(&self) -> [Control; 2] {
        [Control::VisitRepository, Control::Exit]
    }

    /// React to a control; the opener is only touched by "Visit Repository"
    pub fn activate(&self, control: Control, opener: &dyn UrlOpener) -> LoopControl {
        match control {
            Control::VisitRepository => {
                info!("Opening {}", REPOSITORY_URL);
                if let Err(e) = opener.open_external(REPOSITORY_URL) {
                    warn!("{}", e);
                }
                LoopControl::Continue
            }
            Control::Exit => LoopControl::Exit,
        }
    }
}
