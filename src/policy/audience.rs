//! Response audiences.

use std::fmt;
use std::str::FromStr;

use crate::error::SanitizeError;
use crate::policy::presets::FieldPolicy;

/// Who a response is for. Each audience maps to exactly one standing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    /// Ordinary API consumers.
    Public,
    /// Administrative listings; sees login telemetry.
    Admin,
    /// Public-facing profile views; allow-list only.
    Profile,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Public => "public",
            Audience::Admin => "admin",
            Audience::Profile => "profile",
        }
    }

    pub fn policy(&self) -> FieldPolicy {
        match self {
            Audience::Public => FieldPolicy::PUBLIC_RESPONSE,
            Audience::Admin => FieldPolicy::ADMIN_RESPONSE,
            Audience::Profile => FieldPolicy::PUBLIC_PROFILE,
        }
    }
}

impl FromStr for Audience {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Audience::Public),
            "admin" => Ok(Audience::Admin),
            "profile" => Ok(Audience::Profile),
            other => Err(SanitizeError::UnknownAudience(other.to_string())),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
