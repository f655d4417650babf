//! `subshell invocation`: show what would be launched.

use std::io::Write;

use super::Failure;
use crate::platform::{invocation, Invocation, Platform};

/// Prints the invocation for `command_line` on this host, one token per line.
///
/// # Errors
///
/// Returns a [`Failure`] if stdout cannot be written.
pub fn run(command_line: &str) -> Result<(), Failure> {
    let inv = invocation(Platform::current(), command_line);
    let stdout = std::io::stdout();
    write_invocation(&mut stdout.lock(), &inv)
        .map_err(|e| Failure::new(format!("Failed to write invocation: {e}")))
}

fn write_invocation(out: &mut impl Write, inv: &Invocation) -> std::io::Result<()> {
    writeln!(out, "{}", inv.program)?;
    for arg in &inv.args {
        writeln!(out, "{arg}")?;
    }
    Ok(())
}
