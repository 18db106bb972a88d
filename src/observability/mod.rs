//! Observability for blogdesk
//!
//! Structured JSON-line logging of typed events.
//!
//! ```ignore
//! use blogdesk::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! log_event_with_fields(Event::PostCreated, &[("slug", "hello-world")]);
//! Logger::log(Severity::Info, "CUSTOM_EVENT", &[("key", "value")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        log_event(Event::ConfigLoaded);
        log_event_with_fields(Event::PostDeleted, &[("slug", "a1")]);
    }
}
