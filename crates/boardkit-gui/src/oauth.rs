//! OAuth return handling.
//!
//! After authorizing an account the backend sends the browser back to the
//! board with a marker in the query string: `<account>=connected` on
//! success or `<account>_error=<reason>` on failure. The panel consumes
//! these markers exactly once and hands back the query with them removed.

use std::fmt;

use boardkit_core::AccountId;
use url::form_urlencoded;

/// Outcome of an OAuth flow, read from the return query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectMarker {
    Connected(AccountId),
    Failed { account: AccountId, reason: String },
}

impl RedirectMarker {
    pub const fn account(&self) -> AccountId {
        match self {
            Self::Connected(account) | Self::Failed { account, .. } => *account,
        }
    }

    /// Banner text for a failed flow.
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::Connected(_) => None,
            Self::Failed { account, reason } => Some(format!(
                "{} connection failed: {reason}",
                account.display_name()
            )),
        }
    }
}

/// Ordered query parameters of the page the panel lives on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectQuery {
    pairs: Vec<(String, String)>,
}

impl RedirectQuery {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove every pair named `key`, returning the first value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let found = self.get(key).map(str::to_string);
        self.pairs.retain(|(k, _)| k != key);
        found
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Remove and return the OAuth markers for every known account.
    ///
    /// `<account>=connected` yields `Connected`; any other value of the
    /// account key is dropped without a marker. A `<account>_error` pair
    /// yields `Failed` with its value as the reason; an empty value is
    /// removed without a marker.
    pub fn take_markers(&mut self) -> Vec<RedirectMarker> {
        let mut markers = Vec::new();
        for account in AccountId::ALL {
            let key = account.as_str();
            if self.remove(key).as_deref() == Some("connected") {
                markers.push(RedirectMarker::Connected(account));
            }
            if let Some(reason) = self.remove(&format!("{key}_error")) {
                if !reason.trim().is_empty() {
                    markers.push(RedirectMarker::Failed { account, reason });
                }
            }
        }
        markers
    }
}

impl fmt::Display for RedirectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}
