//! Standing field policies.
//!
//! Three tiers, each bound to one response audience:
//! - public responses drop credentials and account-security telemetry
//! - admin responses drop credentials only
//! - public profiles keep a fixed allow-list and nothing else

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::policy::fields::UserField;
use crate::security::sanitizer::{only_fields, sanitize_list, without_fields, Record};

/// Credential and account-security fields hidden from general responses.
pub const SENSITIVE_USER_FIELDS: &[UserField] = &[
    UserField::Password,
    UserField::PasswordHash,
    UserField::ResetToken,
    UserField::ResetTokenExpires,
    UserField::FailedLoginAttempts,
    UserField::LockedUntil,
];

/// Authentication secrets hidden even from admins.
///
/// Login-attempt counters and lock timestamps stay visible here.
pub const ADMIN_EXCLUDED_USER_FIELDS: &[UserField] = &[
    UserField::Password,
    UserField::PasswordHash,
    UserField::ResetToken,
    UserField::ResetTokenExpires,
];

/// The only fields a public profile may carry.
pub const PUBLIC_USER_FIELDS: &[UserField] = &[
    UserField::Id,
    UserField::Email,
    UserField::Name,
    UserField::CreatedAt,
    UserField::IsAdmin,
    UserField::CoupleId,
    UserField::Role,
];

/// Whether a policy's field list is removed or retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Deny,
    Allow,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Deny => "deny",
            PolicyKind::Allow => "allow",
        }
    }
}

/// A named, immutable deny-list or allow-list over user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    name: &'static str,
    kind: PolicyKind,
    fields: &'static [UserField],
}

impl FieldPolicy {
    pub const PUBLIC_RESPONSE: FieldPolicy = FieldPolicy {
        name: "public_response",
        kind: PolicyKind::Deny,
        fields: SENSITIVE_USER_FIELDS,
    };

    pub const ADMIN_RESPONSE: FieldPolicy = FieldPolicy {
        name: "admin_response",
        kind: PolicyKind::Deny,
        fields: ADMIN_EXCLUDED_USER_FIELDS,
    };

    pub const PUBLIC_PROFILE: FieldPolicy = FieldPolicy {
        name: "public_profile",
        kind: PolicyKind::Allow,
        fields: PUBLIC_USER_FIELDS,
    };

    pub const ALL: &'static [FieldPolicy] = &[
        FieldPolicy::PUBLIC_RESPONSE,
        FieldPolicy::ADMIN_RESPONSE,
        FieldPolicy::PUBLIC_PROFILE,
    ];

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> PolicyKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [UserField] {
        self.fields
    }

    /// Whether a field with this name survives the policy.
    pub fn permits(&self, field_name: &str) -> bool {
        let listed = self.fields.iter().any(|f| f.as_str() == field_name);
        match self.kind {
            PolicyKind::Deny => !listed,
            PolicyKind::Allow => listed,
        }
    }

    /// Apply to a single record. `None` passes through.
    pub fn apply<R: Record>(&self, record: Option<&R>) -> Option<R> {
        record.map(|r| self.apply_to(r))
    }

    /// Apply to a present record.
    pub fn apply_to<R: Record>(&self, record: &R) -> R {
        match self.kind {
            PolicyKind::Deny => without_fields(record, self.fields),
            PolicyKind::Allow => only_fields(record, self.fields),
        }
    }

    /// Apply element-wise, preserving order and length.
    pub fn apply_all<R: Record>(&self, records: &[R]) -> Vec<R> {
        sanitize_list(records, |r| self.apply_to(r))
    }
}

impl fmt::Display for FieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.kind.as_str())
    }
}

lazy_static! {
    /// Standing policies keyed by name, built once per process.
    static ref POLICY_REGISTRY: HashMap<&'static str, FieldPolicy> = FieldPolicy::ALL
        .iter()
        .map(|p| (p.name(), *p))
        .collect();
}

/// Look up a standing policy by name.
pub fn policy_named(name: &str) -> Option<FieldPolicy> {
    POLICY_REGISTRY.get(name).copied()
}
