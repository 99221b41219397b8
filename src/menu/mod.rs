//! Game setup.
//!
//! Mode and difficulty selection happen before the first move and produce a
//! [`GameConfig`]. The binary builds one from command-line flags.

pub mod config;

pub use config::*;
