//! User models.
//!
//! `UserRecord` mirrors the full users row as the data-access layer loads
//! it, secrets included. `PublicUser` is the public profile projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{json_kind, SanitizeError};
use crate::security::sanitizer::to_public_user;

/// Role of an account within the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Couple,
    Planner,
    Admin,
}

/// Represents a user row as loaded from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub reset_token: Option<String>,
    pub reset_token_expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failed_login_attempts: u32,
    pub locked_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_admin: bool,
    pub couple_id: Option<Uuid>,
    #[serde(default)]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Convert to an untyped record for the sanitizer.
    pub fn to_record(&self) -> Result<Map<String, Value>, SanitizeError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(SanitizeError::NotARecord {
                kind: json_kind(&other),
            }),
        }
    }
}

/// The public profile of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub is_admin: bool,
    pub couple_id: Option<Uuid>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl PublicUser {
    /// Project a user through the public allow-list.
    pub fn from_user(user: &UserRecord) -> Result<Self, SanitizeError> {
        let record = user.to_record()?;
        let projected = to_public_user(Some(&record)).unwrap_or_default();
        Ok(serde_json::from_value(Value::Object(projected))?)
    }
}
