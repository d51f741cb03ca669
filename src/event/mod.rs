//! # Event
//!
//! An [`Entry`] records something that happened to a receiver: a shower, a dose of
//! medication, a weight measurement and so on. The kinds of events are not open-ended,
//! each one has to be described by a bundled [`EventConfig`].
//!
//! ```rust
//! use care_giver_common::event::{DataPoint, Entry};
//!
//! let entry = Entry::builder("Receiver#123", "User#123", "weight")
//!     .data(vec![DataPoint::new("Weight", 120.3)])
//!     .note("after breakfast")
//!     .build()
//!     .unwrap();
//!
//! assert!(entry.event_id.starts_with("Event#"));
//! assert_eq!(entry.event_type, "Weight");
//! ```

mod reader;

pub use reader::{all_configs, read_event_config, ColorConfig, DataConfig, EventConfig, GraphConfig};

use super::error::Error;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of every generated event id.
pub const DB_PREFIX: &str = "Event";

/// A single recorded event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub event_id: String,
    pub receiver_id: String,
    pub user_id: String,
    /// RFC 3339 timestamp in UTC.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<DataPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    /// Create [`EntryBuilder`].
    pub fn builder(
        receiver_id: impl Into<String>,
        user_id: impl Into<String>,
        event_type: impl Into<String>,
    ) -> EntryBuilder {
        EntryBuilder::new(receiver_id, user_id, event_type)
    }
}

/// A named measurement attached to an [`Entry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: DataValue,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, value: impl Into<DataValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl From<f64> for DataValue {
    fn from(val: f64) -> Self {
        Self::Number(val)
    }
}

impl From<i64> for DataValue {
    fn from(val: i64) -> Self {
        Self::Number(val as f64)
    }
}

impl From<bool> for DataValue {
    fn from(val: bool) -> Self {
        Self::Flag(val)
    }
}

impl From<&str> for DataValue {
    fn from(val: &str) -> Self {
        Self::Text(val.to_string())
    }
}

impl From<String> for DataValue {
    fn from(val: String) -> Self {
        Self::Text(val)
    }
}

/// A builder for [`Entry`].
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    receiver_id: String,
    user_id: String,
    event_type: String,
    timestamp: Option<String>,
    data: Vec<DataPoint>,
    note: Option<String>,
}

impl EntryBuilder {
    pub fn new(
        receiver_id: impl Into<String>,
        user_id: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        Self {
            receiver_id: receiver_id.into(),
            user_id: user_id.into(),
            event_type: event_type.into(),
            timestamp: None,
            data: vec![],
            note: None,
        }
    }

    /// Set when the event happened.
    ///
    /// Setting any timestamp is optional. If you omit calling this method,
    /// the time of [`build`](EntryBuilder::build) is used.
    pub fn timestamp(self, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            ..self
        }
    }

    pub fn data(self, data: Vec<DataPoint>) -> Self {
        Self { data, ..self }
    }

    pub fn note(self, note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..self
        }
    }

    /// Consumes the builder and constructs an [`Entry`] with a new event id.
    ///
    /// Fails with [`Error::UnknownEventType`] if no configuration describes the event type.
    pub fn build(self) -> Result<Entry, Error> {
        let config = read_event_config(&self.event_type)?;

        Ok(Entry {
            event_id: format!("{DB_PREFIX}#{}", Uuid::new_v4()),
            receiver_id: self.receiver_id,
            user_id: self.user_id,
            timestamp: self
                .timestamp
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            event_type: config.event_type,
            data: self.data,
            note: self.note,
        })
    }
}
