//! JSON import box. Input is only checked for being well-formed JSON; the
//! parsed value is dropped, never stored or applied.

use chrono::{DateTime, Duration, Local};
use serde_json::Value;

use crate::scheduler::Scheduled;

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImportStatus {
    #[default]
    Idle,
    Success,
    Error(String),
}

impl ImportStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            ImportStatus::Idle => None,
            ImportStatus::Success => Some("Data imported successfully"),
            ImportStatus::Error(_) => Some("Invalid JSON format"),
        }
    }
}

#[derive(Debug)]
pub struct ImportPanel {
    pub input: String,
    status: ImportStatus,
    reset: Option<Scheduled<()>>,
    status_lifetime: Duration,
}

impl ImportPanel {
    pub fn new(status_lifetime: Duration) -> Self {
        ImportPanel {
            input: String::new(),
            status: ImportStatus::Idle,
            reset: None,
            status_lifetime,
        }
    }

    pub fn status(&self) -> &ImportStatus {
        &self.status
    }

    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn submit(&mut self, now: DateTime<Local>) -> &ImportStatus {
        if !self.can_submit() {
            return &self.status;
        }
        self.status = match serde_json::from_str::<Value>(&self.input) {
            Ok(value) => {
                tracing::info!(kind = value_kind(&value), "import validated");
                ImportStatus::Success
            }
            Err(e) => {
                tracing::debug!(error = %e, "import rejected");
                ImportStatus::Error(e.to_string())
            }
        };
        self.reset = Some(Scheduled::after(now, self.status_lifetime, ()));
        &self.status
    }

    pub fn poll(&mut self, now: DateTime<Local>) {
        if let Some(reset) = self.reset.as_mut() {
            if reset.poll(now).is_some() {
                self.status = ImportStatus::Idle;
                self.reset = None;
            }
        }
    }

    /// How long the current status has left before it clears, if one is showing.
    pub fn status_remaining(&self, now: DateTime<Local>) -> Option<Duration> {
        self.reset
            .as_ref()
            .filter(|reset| reset.is_pending())
            .map(|reset| reset.remaining(now))
    }

    pub fn next_deadline(&self) -> Option<DateTime<Local>> {
        self.reset.as_ref().map(Scheduled::due)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
