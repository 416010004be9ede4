// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Startup banner written to stdout before the presentation shell runs

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::{APP_NAME, REPOSITORY_URL, VERSION};

/// Features announced for upcoming releases
pub const PLANNED_FEATURES: [&str; 6] = [
    "File manager integration",
    "Client folder scanning",
    "Metadata management",
    "Windows context menu integration",
    "Real-time file watching",
    "Treatment timeline visualization",
];

const RULE_WIDTH: usize = 60;

/// Render the banner text, one trailing newline per line
pub fn render_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{} v{}", APP_NAME, VERSION);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "\nWelcome to {}!", APP_NAME);
    let _ = writeln!(out, "\nThis is the initial release of the application.");
    let _ = writeln!(out, "Core functionality is currently in development.");
    let _ = writeln!(out, "\nFeatures coming soon:");
    for feature in PLANNED_FEATURES {
        let _ = writeln!(out, "  • {}", feature);
    }
    let _ = writeln!(out, "\nFor more information, visit:");
    let _ = writeln!(out, "{}", REPOSITORY_URL);
    let _ = writeln!(out, "\n{}", rule);

    out
}

/// Write the banner to any output stream
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(render_banner().as_bytes())?;
    out.flush()
}

/// Print the banner to stdout
pub fn print_banner() {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_banner(&mut handle) {
        tracing::warn!("Failed to write banner: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_exact_text() {
        let expected = "\
============================================================
Client Treatment Organizer v0.0.1
============================================================

Welcome to Client Treatment Organizer!

This is the initial release of the application.
Core functionality is currently in development.

Features coming soon:
  • File manager integration
  • Client folder scanning
  • Metadata management
  • Windows context menu integration
  • Real-time file watching
  • Treatment timeline visualization

For more information, visit:
https://github.com/DrDisc/Client_treatment_Organizer

============================================================
";
        assert_eq!(render_banner(), expected);
    }

    #[test]
    fn test_banner_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_banner(&mut first).unwrap();
        write_banner(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
