use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of every generated receiver id.
pub const DB_PREFIX: &str = "Receiver";

/// A person being cared for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Receiver {
    pub receiver_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Receiver {
    /// Create a receiver with a freshly generated `Receiver#<uuid>` id.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            receiver_id: format!("{DB_PREFIX}#{}", Uuid::new_v4()),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
