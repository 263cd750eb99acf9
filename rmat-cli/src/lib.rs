//! Support library for the `rmat` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests can
//! drive generation in-process without spawning a subprocess.

pub mod cli;
pub mod logging;
