//! Port definitions for the board REST backend.
//!
//! Ports use only domain types. The reqwest implementation lives in
//! `boardkit-http`; tests substitute fakes or mocks.

mod board_api;
mod error;

pub use board_api::{BoardApiPort, ReplaceOutcome};
pub use error::{ApiPortError, ApiResult};
