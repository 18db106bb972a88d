//! Observable events for blogdesk.
//!
//! Events are explicit and typed; log lines carry the event name.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP server bound and serving
    ServerStart,
    /// A setting is unsafe for production
    InsecureConfig,

    // Authentication
    /// Password accepted, token issued
    LoginSucceeded,
    /// Password rejected
    LoginRejected,
    /// Bearer token missing or invalid
    AuthFailure,

    // Store mutations
    PostCreated,
    PostUpdated,
    PostDeleted,
    /// Index document rebuilt
    IndexRegenerated,
    /// Unexpected filesystem error at an operation boundary
    StorageFailure,
    /// Index listing disagrees with the post documents
    IndexMismatch,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::InsecureConfig => "INSECURE_CONFIG",
            Event::LoginSucceeded => "LOGIN_SUCCEEDED",
            Event::LoginRejected => "LOGIN_REJECTED",
            Event::AuthFailure => "AUTH_FAILURE",
            Event::PostCreated => "POST_CREATED",
            Event::PostUpdated => "POST_UPDATED",
            Event::PostDeleted => "POST_DELETED",
            Event::IndexRegenerated => "INDEX_REGENERATED",
            Event::StorageFailure => "STORAGE_FAILURE",
            Event::IndexMismatch => "INDEX_MISMATCH",
        }
    }

    /// Default severity for this event
    pub fn severity(&self) -> super::Severity {
        use super::Severity;
        match self {
            Event::StorageFailure => Severity::Error,
            Event::InsecureConfig
            | Event::LoginRejected
            | Event::AuthFailure
            | Event::IndexMismatch => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::Severity;

    #[test]
    fn test_event_names_are_screaming_snake() {
        for event in [Event::PostCreated, Event::IndexRegenerated, Event::LoginRejected] {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::StorageFailure.severity(), Severity::Error);
        assert_eq!(Event::LoginRejected.severity(), Severity::Warn);
        assert_eq!(Event::PostDeleted.severity(), Severity::Info);
    }
}
