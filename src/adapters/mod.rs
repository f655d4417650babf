//! Implementations of the port traits.
//!
//! `live` talks to the operating system, `recording` wraps another adapter
//! and writes what it saw to a cassette, `replaying` answers from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
