//! Application telemetry events and sinks.
//!
//! Tutorlink has no metrics backend; telemetry exists to make listing loads
//! and transport retries visible when debugging against a flaky API.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Tutorlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A page of tutors finished loading.
    TutorPageLoaded {
        /// Page that was shown (1-based).
        page: u32,
        /// Total tutors matching the filter.
        total: u64,
    },
    /// A request failed in transport and is being retried.
    RequestRetried {
        /// Endpoint path of the request.
        path: String,
        /// Retry number (1-based).
        attempt: u32,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
