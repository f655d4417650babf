//! Live process launcher using `tokio::process::Command`.

use std::io;
use std::process::Stdio;

use tokio::process::Command;

use crate::platform::Invocation;
use crate::ports::process::{LaunchFuture, ProcessExit, ProcessLauncher};

/// Live launcher that spawns real processes with inherited stdio.
///
/// Must be used from within a tokio runtime.
pub struct LiveProcessLauncher;

impl ProcessLauncher for LiveProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> LaunchFuture {
        let mut command = build_command(invocation);
        command.stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());

        match command.spawn() {
            Ok(mut child) => {
                tracing::debug!(program = %invocation.program, pid = child.id(), "spawned");
                Box::pin(async move {
                    let status = child.wait().await?;
                    Ok(ProcessExit { code: status.code() })
                })
            }
            Err(err) => {
                tracing::debug!(program = %invocation.program, error = %err, "spawn failed");
                Box::pin(std::future::ready(Err::<ProcessExit, io::Error>(err)))
            }
        }
    }
}

#[cfg(windows)]
fn build_command(invocation: &Invocation) -> Command {
    let mut command = Command::new(&invocation.program);
    if invocation.program == crate::platform::WINDOWS_SHELL {
        // cmd.exe does its own quote parsing; the argument is already quoted.
        for arg in &invocation.args {
            command.raw_arg(arg);
        }
    } else {
        command.args(&invocation.args);
    }
    command
}

#[cfg(not(windows))]
fn build_command(invocation: &Invocation) -> Command {
    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    command
}
