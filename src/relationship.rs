use serde::{Deserialize, Serialize};

/// The link between a user and a receiver they care for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub user_id: String,
    pub receiver_id: String,
    pub primary_care_giver: bool,
    pub email_notifications: bool,
}

impl Relationship {
    pub fn new(user_id: impl Into<String>, receiver_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            receiver_id: receiver_id.into(),
            ..Default::default()
        }
    }

    pub fn primary_care_giver(self, primary_care_giver: bool) -> Self {
        Self {
            primary_care_giver,
            ..self
        }
    }

    pub fn email_notifications(self, email_notifications: bool) -> Self {
        Self {
            email_notifications,
            ..self
        }
    }
}
