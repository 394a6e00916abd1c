//! Forecast request state machine.
//!
//! Every selection starts a new request identified by a `RequestToken`.
//! Completions carrying any other token are stale and must be dropped.

/// Identifies one forecast request. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Load state of the forecast panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading(RequestToken),
    Loaded,
    Failed,
}

impl LoadState {
    pub fn is_loading(self) -> bool {
        matches!(self, LoadState::Loading(_))
    }
}

/// Hands out request tokens and decides which completion may update the view.
#[derive(Debug, Default)]
pub struct RequestTracker {
    last_issued: u64,
    state: LoadState,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Start a new request, superseding whatever was in flight.
    pub fn begin(&mut self) -> RequestToken {
        self.last_issued += 1;
        let token = RequestToken(self.last_issued);
        if let LoadState::Loading(previous) = self.state {
            tracing::debug!("Request {} superseded by {}", previous, token);
        }
        self.state = LoadState::Loading(token);
        token
    }

    /// True if `token` belongs to the request currently in flight.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.state == LoadState::Loading(token)
    }

    /// Record a completion. Returns false (and changes nothing) for stale tokens.
    pub fn finish(&mut self, token: RequestToken, success: bool) -> bool {
        if !self.is_current(token) {
            tracing::debug!("Ignoring stale completion for request {}", token);
            return false;
        }
        self.state = if success {
            LoadState::Loaded
        } else {
            LoadState::Failed
        };
        true
    }
}
