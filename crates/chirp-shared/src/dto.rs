//! Data Transfer Objects - the login request/response pair.

use serde::{Deserialize, Serialize};

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response.
///
/// Success and failure share this shape and the same HTTP status; only the
/// message text tells them apart. Callers match on the message. A long-known
/// quirk of this API that clients depend on, so it stays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub email: String,
    pub message: String,
}

impl LoginResponse {
    pub const ACCEPTED: &str = "Login successful!";
    pub const REJECTED: &str = "Login unsuccessful!";

    pub fn accepted(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: Self::ACCEPTED.to_string(),
        }
    }

    pub fn rejected(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: Self::REJECTED.to_string(),
        }
    }
}
