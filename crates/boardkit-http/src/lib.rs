#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultBoardApiClient is meant to be used through the BoardApiPort
// trait, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultBoardApiClient;

// Configuration
pub use config::{BoardApiConfig, DEFAULT_BASE_URL};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
