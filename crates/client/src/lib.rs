//! Composition root for the character sandbox.
//!
//! The `sandbox` binary wires three pieces together:
//! - [`config`]: Settings loaded from the environment
//! - [`logging`]: `tracing` subscriber writing to stderr
//! - [`demo`]: The demonstration driver writing attack lines to stdout

pub mod config;
pub mod demo;
pub mod logging;

pub use config::{ClientConfig, ConfigError};
