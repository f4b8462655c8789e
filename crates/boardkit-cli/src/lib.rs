//! boardkit command-line interface.
//!
//! The `boardkit` binary is a thin front end over the settings panel
//! facade in `boardkit-gui`: `bootstrap` wires the HTTP client into a
//! `SettingsPanel`, and each handler opens the panel on its tab and calls
//! one operation.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{BoardCommand, Commands, CredentialsCommand, IntegrationsCommand};
pub use error::CliError;
pub use parser::Cli;
