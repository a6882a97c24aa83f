/// Reasons a listener registration can be refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event type name was empty
    EmptyEventType,
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventError::EmptyEventType => write!(f, "Event type must not be empty"),
        }
    }
}

impl std::error::Error for EventError {}
