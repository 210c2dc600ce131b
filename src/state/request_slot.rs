//! Last-initiated-wins bookkeeping for one logical request target.

/// Monotonic identifier handed to each started request.
pub type RequestToken = u64;

/// Tracks the most recently started request for a target.
///
/// Starting a request replaces the current token; a completion only counts
/// when it carries the current token. Anything else is a superseded request
/// and must be ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestSlot {
    current: Option<RequestToken>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a request, superseding whatever was in flight.
    pub fn begin(&mut self, token: RequestToken) {
        self.current = Some(token);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    /// Finish a request. Returns `true` if `token` was current, in which case
    /// the slot goes back to idle; stale tokens leave it untouched.
    pub fn complete(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Drop the in-flight request so its result will be ignored.
    pub fn abandon(&mut self) {
        self.current = None;
    }

    pub fn is_loading(&self) -> bool {
        self.current.is_some()
    }
}
