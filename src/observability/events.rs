//! Observable events
//!
//! Every log line names one of these.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    BootStart,
    ConfigLoaded,
    /// Backing file read and parsed
    StoreLoaded,
    /// Backing file created by `init`
    StoreInitialized,
    ServerListening,
    /// A `cors_origins` entry that is not an origin
    CorsOriginIgnored,
    ShutdownComplete,

    // Requests
    HttpRequest,

    // Write path
    AnimalCreated,
    AnimalRejected,
    StorePersisted,
    StorePersistFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::CorsOriginIgnored => "CORS_ORIGIN_IGNORED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::AnimalCreated => "ANIMAL_CREATED",
            Event::AnimalRejected => "ANIMAL_REJECTED",
            Event::StorePersisted => "STORE_PERSISTED",
            Event::StorePersistFailed => "STORE_PERSIST_FAILED",
        }
    }

    /// Default severity when logged via `log_event`
    pub fn severity(&self) -> Severity {
        match self {
            Event::StorePersistFailed => Severity::Error,
            Event::AnimalRejected | Event::CorsOriginIgnored => Severity::Warn,
            Event::StorePersisted => Severity::Trace,
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

    #[test]
    fn test_event_names_are_screaming_snake() {
        for event in [
            Event::BootStart,
            Event::StoreLoaded,
            Event::HttpRequest,
            Event::StorePersistFailed,
        ] {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_persist_failure_is_error() {
        assert_eq!(Event::StorePersistFailed.severity(), Severity::Error);
        assert_eq!(Event::AnimalCreated.severity(), Severity::Info);
    }
}
