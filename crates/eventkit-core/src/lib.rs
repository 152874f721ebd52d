// ABOUTME: Core library for eventkit, containing the Event record and the in-memory EventLog.
// ABOUTME: The log is append-only, single-threaded, and assigns monotonic ids starting at 1.

pub mod event;
pub mod log;

pub use event::{Event, EventData, TIMESTAMP_FORMAT, format_timestamp};
pub use log::{EventLog, LogError, SEPARATOR_WIDTH};
