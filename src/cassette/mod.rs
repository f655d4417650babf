//! Cassettes: recorded port interactions that can be replayed later.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
