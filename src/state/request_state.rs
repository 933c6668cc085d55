/// Lifecycle of one remote-fetched piece of state. Each store owns exactly
/// one of these; the UI only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    /// Nothing has been requested yet.
    Idle,
    /// A request is in flight. Set synchronously when the fetch is issued.
    Pending,
    /// The latest request completed successfully.
    Ready(T),
    /// The latest request failed. Holds a display-ready message.
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}
