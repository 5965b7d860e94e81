//! Profile model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user profile record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub slack_webhook_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile for the given user
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            slack_webhook_url: None,
            updated_at: Utc::now(),
        }
    }
}
