//! Board settings panel facade for boardkit front ends.
//!
//! This crate provides `SettingsPanel`, an adapter-neutral orchestration
//! layer over the board API. The CLI drives it today; a desktop shell or a
//! web handler would delegate to it the same way.
//!
//! # Architecture
//!
//! ```text
//! Front ends:    boardkit-cli      (desktop / web)
//!                      ↓                 ↓
//! Facade:              └─ boardkit-gui ──┘
//!                        SettingsPanel
//!                              ↓
//! Core:                  boardkit-core  ←  boardkit-http
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - the API client is injected via
//!    `PanelDeps` as an `Arc<dyn BoardApiPort>`
//! 2. **One session per open** - every open starts a new generation and
//!    cancellation token; late results from a closed session are dropped
//! 3. **Semantic errors** - operations return `GuiError`, front ends map it
//!    to banners or exit codes

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

mod backend;
mod deps;
mod error;

mod board;
mod credentials;
mod integrations;
pub mod oauth;
pub mod panel;
mod session;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

// Primary exports
pub use backend::SettingsPanel;
pub use deps::PanelDeps;
pub use error::GuiError;

// Snapshot projections, usable on any `StoreSnapshot`
pub use board::overview;
pub use credentials::{account_statuses, api_key_view};
pub use integrations::{available, server_cards};

pub use oauth::{RedirectMarker, RedirectQuery};
pub use panel::{DangerForm, GeneralForm, IntegrationsView, PanelState, SettingsTab};
pub use store::{BoardStore, Generation, StoreSnapshot};
