use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

use super::user::User;

/// Post entity - a short text post with a denormalized author snapshot.
///
/// The snapshot is a copy taken at posting time. Updating or deleting the
/// user afterwards leaves it untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub post_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub author: User,
}

/// Post input. The caller assigns the id and supplies the author snapshot;
/// `created_at` falls back to server time when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub post_id: Uuid,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub author: User,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        let len = self.content.chars().count();
        if !(1..=256).contains(&len) {
            return Err(DomainError::Validation(
                "content must be 1 to 256 characters".to_string(),
            ));
        }
        self.author.validate()
    }
}
