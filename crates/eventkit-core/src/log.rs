// ABOUTME: Append-only in-memory event log with monotonic ids and linear-scan queries.
// ABOUTME: Provides append, lookup by id or name, clear, and a plain-text summary writer.

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::event::{Event, EventData};

/// Width of the dashed separator printed under the summary header.
pub const SEPARATOR_WIDTH: usize = 50;

/// Errors from the typed append helpers. The plain `append` never fails.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("event data must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered, in-memory collection of events. Insertion order, append order
/// and id order are the same thing. Not internally synchronized.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: Vec<Event>,
    next_id: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }
}

impl EventLog {
    /// Create an empty log whose first event will receive id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new event, stamping it with the next id and the current time.
    /// The returned reference borrows the log, so the event cannot change
    /// while the caller holds it; clone it to keep an owned copy.
    pub fn append(&mut self, name: impl Into<String>, data: EventData) -> &Event {
        let event = Event {
            id: self.next_id,
            name: name.into(),
            timestamp: Utc::now(),
            data,
        };
        self.next_id += 1;

        tracing::debug!("appended event {} ({})", event.id, event.name);

        let idx = self.events.len();
        self.events.push(event);
        &self.events[idx]
    }

    /// Append with data given as an arbitrary JSON value. Only objects are
    /// accepted; a rejected value does not consume an id.
    pub fn append_value(
        &mut self,
        name: impl Into<String>,
        data: Value,
    ) -> Result<&Event, LogError> {
        match data {
            Value::Object(map) => Ok(self.append(name, map)),
            other => {
                let kind = json_kind(&other);
                tracing::debug!("rejected event data of kind {}", kind);
                Err(LogError::NotAnObject(kind))
            }
        }
    }

    /// Append with data taken from any serializable payload that renders as
    /// a JSON object (typically a struct or map).
    pub fn append_serialized<T: Serialize>(
        &mut self,
        name: impl Into<String>,
        data: &T,
    ) -> Result<&Event, LogError> {
        let value = serde_json::to_value(data)?;
        self.append_value(name, value)
    }

    /// Look up an event by id. Returns `None` for ids never issued or
    /// discarded by `clear`.
    pub fn get_by_id(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// All events whose name is byte-equal to `name`, in append order.
    pub fn find_by_name(&self, name: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.name == name).collect()
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The id the next appended event will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Discard every event and restart id allocation at 1.
    pub fn clear(&mut self) {
        let discarded = self.events.len();
        self.events.clear();
        self.next_id = 1;
        tracing::info!("cleared event log, discarded {} events", discarded);
    }

    /// Write the total count, a dashed separator, then one summary line per
    /// event in append order.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total Events: {}", self.events.len())?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for event in &self.events {
            writeln!(out, "{}", event.summary_line())?;
        }
        Ok(())
    }

    /// Write the summary to standard output.
    pub fn print_summary(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_summary(&mut handle)?;
        handle.flush()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
