// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Opening external links in the host's default browser

use std::io;
use std::process::Command;
use std::thread::{self, JoinHandle};
use tracing::debug;

use crate::{OrganizerError, Result};

/// Collaborator that hands a URL to something outside the process
pub trait UrlOpener: Send + Sync {
    fn open_external(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform launcher
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    /// Launcher command for the current platform
    fn command(url: &str) -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/c", "start", "", url]);
            cmd
        }
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl UrlOpener for SystemOpener {
    fn open_external(&self, url: &str) -> Result<()> {
        let cmd = Self::command(url);
        debug!("Launching {:?}", cmd);
        spawn_reaped(cmd).map_err(|e| OrganizerError::Open {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// Start `cmd` and wait for it on a detached thread so no zombie is left behind
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<()>> {
    let mut child = cmd.spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => debug!("Launcher exited with {}", status),
        Ok(_) => {}
        Err(e) => debug!("Failed to wait on launcher: {}", e),
    }))
}
