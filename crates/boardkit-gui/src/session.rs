//! Panel session handle.

use std::future::Future;

use boardkit_core::ApiResult;
use tokio_util::sync::CancellationToken;

use crate::error::GuiError;
use crate::store::Generation;

/// One open period of the settings panel.
///
/// Operations capture the session they were started in; their API calls
/// are abandoned once the session is cancelled, and their store writes are
/// tagged with the session's generation.
#[derive(Debug, Clone)]
pub struct Session {
    generation: Generation,
    cancel: CancellationToken,
}

impl Session {
    pub(crate) const fn new(generation: Generation, cancel: CancellationToken) -> Self {
        Self { generation, cancel }
    }

    pub const fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub(crate) fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Await an API call unless the session is cancelled first.
    pub(crate) async fn run<T, F>(&self, call: F) -> Result<T, GuiError>
    where
        F: Future<Output = ApiResult<T>>,
    {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(GuiError::Cancelled),
            result = call => result.map_err(GuiError::from),
        }
    }
}
