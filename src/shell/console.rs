// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! Console fallback used when no window can be shown

use std::io::{BufRead, Write};

use crate::Result;

/// Print the fallback notice and block until one line (or EOF) is read
pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "\nNote: GUI not available. Running in console mode.")?;
    writeln!(output, "Press Enter to exit...")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        tracing::debug!("stdin closed before a line was read");
    }
    Ok(())
}
