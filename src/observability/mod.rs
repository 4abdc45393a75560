//! Observability for zookeepr
//!
//! Structured, synchronous JSON logging:
//! - one log line = one event
//! - `event` first, `severity` second, remaining fields sorted by key
//! - TRACE/INFO/WARN to stdout, ERROR/FATAL to stderr
//!
//! ```ignore
//! use zookeepr::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::AnimalCreated, &[("id", "4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = event.severity();
    if severity >= Severity::Error {
        Logger::log_stderr(severity, event.as_str(), fields);
    } else {
        Logger::log(severity, event.as_str(), fields);
    }
}
