// ABOUTME: Defines the Event record stored by the in-memory event log.
// ABOUTME: Events are immutable, timestamped, named records carrying a free-form JSON mapping.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form key/value mapping attached to an event. Values may be any JSON
/// type; the log stores them verbatim and never inspects them.
pub type EventData = Map<String, Value>;

/// `strftime` pattern used when rendering event times in summaries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single named, timestamped record. Ids are assigned by the owning log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub data: EventData,
}

impl Event {
    /// Render the one-line summary form:
    /// `ID: <id> | Name: <name> | Time: YYYY-MM-DD HH:MM:SS`.
    pub fn summary_line(&self) -> String {
        format!(
            "ID: {} | Name: {} | Time: {}",
            self.id,
            self.name,
            format_timestamp(self.timestamp)
        )
    }
}

/// Format a timestamp in local time with zero-padded fields and second resolution.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}
