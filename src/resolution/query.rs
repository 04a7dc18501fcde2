//! Progress of the current address-resolution attempt.

/// Tri-state status of the current resolution attempt.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// Holds the [`QueryStatus`]. Readable anywhere, writable only from the
/// resolution module.
///
#[derive(Clone, Debug, Default)]
pub struct QueryState {
    status: QueryStatus,
}

impl QueryState {
    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    /// Message of the last failed attempt, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Loading`, clearing any prior error. Returns false without
    /// changing anything when an attempt is already in flight.
    pub(super) fn start(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.status = QueryStatus::Loading;
        true
    }

    pub(super) fn finish(&mut self) {
        self.status = QueryStatus::Idle;
    }

    pub(super) fn fail(&mut self, message: String) {
        self.status = QueryStatus::Error(message);
    }

    pub(super) fn reset(&mut self) {
        self.status = QueryStatus::Idle;
    }
}
