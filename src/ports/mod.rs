//! Port traits defining external boundaries.
//!
//! Implementations live in `src/adapters/`.

pub mod process;

pub use process::{LaunchFuture, ProcessExit, ProcessLauncher};
