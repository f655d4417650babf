//! Binary entrypoint for the `subshell` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match subshell::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{}", failure.message.trim_end());
            ExitCode::from(failure.exit_code)
        }
    }
}
