use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of every generated user id.
pub const DB_PREFIX: &str = "User";

/// An account holder giving care to one or more receivers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: String,
    /// Key of the email index; left out of the stored item when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Create a user with a freshly generated `User#<uuid>` id.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: format!("{DB_PREFIX}#{}", Uuid::new_v4()),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
