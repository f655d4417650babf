//! Shell selection for the host platform.
//!
//! Turning a command string into a concrete program and argument list is a
//! pure function of the platform, kept apart from spawning so the branching
//! can be checked without launching anything.

use std::fmt;

/// Program used to interpret commands on Windows.
pub const WINDOWS_SHELL: &str = "cmd.exe";

/// Program used to interpret commands everywhere else.
pub const POSIX_SHELL: &str = "/bin/sh";

/// The family of command interpreter available on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows hosts, served by `cmd.exe`.
    Windows,
    /// Every other host, served by `/bin/sh`.
    Unix,
}

impl Platform {
    /// Maps an operating system identifier (as in [`std::env::consts::OS`])
    /// to a platform. Only `"windows"` selects [`Platform::Windows`].
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        if os == "windows" {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// The platform this process is running on.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }
}

/// A program and the arguments to launch it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path or name of the shell executable.
    pub program: String,
    /// Arguments passed to the shell, in order.
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Builds the shell invocation that runs `command` on `platform`.
///
/// On Windows the command is wrapped in literal double quotes so that
/// `cmd.exe /s` strips exactly that outer pair. Quotes inside `command` are
/// left alone; how `cmd.exe` treats them is up to `cmd.exe`.
#[must_use]
pub fn invocation(platform: Platform, command: &str) -> Invocation {
    match platform {
        Platform::Windows => Invocation {
            program: WINDOWS_SHELL.to_string(),
            args: vec!["/s".to_string(), "/c".to_string(), format!("\"{command}\"")],
        },
        Platform::Unix => Invocation {
            program: POSIX_SHELL.to_string(),
            args: vec!["-c".to_string(), command.to_string()],
        },
    }
}
