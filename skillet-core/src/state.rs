//! Per-resource asynchronous loading state.
//!
//! Each view owns one [`ViewStateController`] per resource. When the view's
//! key input (a search query or a detail id) changes before a prior fetch
//! resolves, the superseded response must not touch state: every fetch is
//! tagged with a strictly increasing token and only the most recent token may
//! complete. Cancellation is logical; in-flight requests are never aborted.

/// Loading state for one resource. Success holds the data and clears any
/// error; Error holds the message and clears any data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Tag identifying one issued fetch. Tokens are strictly increasing per
/// controller; a completion whose token is not the latest is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// State machine for one asynchronously loaded resource:
/// idle -> loading -> success | error, re-entering loading on every `begin`.
#[derive(Debug)]
pub struct ViewStateController<T> {
    state: LoadState<T>,
    latest: u64,
}

impl<T> ViewStateController<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Start a new fetch: enter Loading and return the token the completion
    /// must present. Any outstanding fetch is superseded.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.state = LoadState::Loading;
        RequestToken(self.latest)
    }

    /// Apply a fetch result. Returns false (and leaves state untouched) when
    /// the token has been superseded by a newer `begin`.
    pub fn complete(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        if token.0 != self.latest {
            tracing::debug!(
                token = token.0,
                latest = self.latest,
                "discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => LoadState::Success(data),
            Err(message) => LoadState::Error(message),
        };
        true
    }

    /// Back to Idle. The token counter keeps increasing so responses from
    /// before the reset stay stale.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
    }
}

impl<T> Default for ViewStateController<T> {
    fn default() -> Self {
        Self::new()
    }
}
