//! Field sanitization for response-bound records.
//!
//! Two primitives do all the work:
//! - [`exclude_fields`] removes a deny-list of fields
//! - [`select_fields`] keeps only an allow-list of fields
//!
//! Both return a fresh copy. The caller's record is never touched, and a
//! missing record (`None`) comes back as `None`. Removed fields are dropped
//! from the map entirely, never nulled out.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::error::{json_kind, SanitizeError};
use crate::policy::presets::{
    FieldPolicy, ADMIN_EXCLUDED_USER_FIELDS, PUBLIC_USER_FIELDS, SENSITIVE_USER_FIELDS,
};

/// An open mapping from field name to opaque value.
///
/// Values are never inspected; only key names drive sanitization.
pub trait Record: Clone {
    /// Keep only the fields for which `keep` returns true.
    fn retain_fields<F: FnMut(&str) -> bool>(&mut self, keep: F);

    fn has_field(&self, name: &str) -> bool;

    fn field_count(&self) -> usize;
}

impl Record for Map<String, Value> {
    fn retain_fields<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.retain(|name, _| keep(name));
    }

    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn field_count(&self) -> usize {
        self.len()
    }
}

impl<V: Clone, S: BuildHasher + Clone> Record for HashMap<String, V, S> {
    fn retain_fields<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.retain(|name, _| keep(name));
    }

    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn field_count(&self) -> usize {
        self.len()
    }
}

impl<V: Clone> Record for BTreeMap<String, V> {
    fn retain_fields<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.retain(|name, _| keep(name));
    }

    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn field_count(&self) -> usize {
        self.len()
    }
}

fn listed<F: AsRef<str>>(fields: &[F], name: &str) -> bool {
    fields.iter().any(|f| f.as_ref() == name)
}

pub(crate) fn without_fields<R: Record, F: AsRef<str>>(record: &R, denied: &[F]) -> R {
    let mut out = record.clone();
    out.retain_fields(|name| !listed(denied, name));
    out
}

pub(crate) fn only_fields<R: Record, F: AsRef<str>>(record: &R, allowed: &[F]) -> R {
    let mut out = record.clone();
    out.retain_fields(|name| listed(allowed, name));
    out
}

/// Copy `record` without any field named in `denied`.
///
/// Every other field is kept with its value unchanged.
pub fn exclude_fields<R: Record, F: AsRef<str>>(record: Option<&R>, denied: &[F]) -> Option<R> {
    record.map(|r| without_fields(r, denied))
}

/// Copy only the fields of `record` named in `allowed`.
///
/// A field that is present with a null value is copied. A field named in
/// `allowed` but absent from `record` stays absent.
pub fn select_fields<R: Record, F: AsRef<str>>(record: Option<&R>, allowed: &[F]) -> Option<R> {
    record.map(|r| only_fields(r, allowed))
}

/// Sanitize each record independently, preserving order and length.
pub fn sanitize_list<R, F>(records: &[R], sanitize: F) -> Vec<R>
where
    F: Fn(&R) -> R,
{
    records.iter().map(sanitize).collect()
}

/// Strip credentials and account-security fields for a general response.
pub fn sanitize_user<R: Record>(user: Option<&R>) -> Option<R> {
    exclude_fields(user, SENSITIVE_USER_FIELDS)
}

pub fn sanitize_users<R: Record>(users: &[R]) -> Vec<R> {
    FieldPolicy::PUBLIC_RESPONSE.apply_all(users)
}

/// Strip authentication secrets only; login telemetry stays visible.
pub fn sanitize_user_for_admin<R: Record>(user: Option<&R>) -> Option<R> {
    exclude_fields(user, ADMIN_EXCLUDED_USER_FIELDS)
}

pub fn sanitize_users_for_admin<R: Record>(users: &[R]) -> Vec<R> {
    FieldPolicy::ADMIN_RESPONSE.apply_all(users)
}

/// Project a user onto the public profile allow-list.
pub fn to_public_user<R: Record>(user: Option<&R>) -> Option<R> {
    select_fields(user, PUBLIC_USER_FIELDS)
}

pub fn to_public_users<R: Record>(users: &[R]) -> Vec<R> {
    FieldPolicy::PUBLIC_PROFILE.apply_all(users)
}

/// Apply a policy to a loose JSON payload.
///
/// `null` stays `null`, an object is sanitized, and an array is sanitized
/// element-wise with null elements kept in place. Scalars and nested arrays
/// are not records and are rejected.
pub fn sanitize_value(value: &Value, policy: &FieldPolicy) -> Result<Value, SanitizeError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Object(record) => Ok(Value::Object(policy.apply_to(record))),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Null => Ok(Value::Null),
                Value::Object(record) => Ok(Value::Object(policy.apply_to(record))),
                Value::Array(_) => Err(SanitizeError::NestedArray { index }),
                other => Err(SanitizeError::NotARecord {
                    kind: json_kind(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(SanitizeError::NotARecord {
            kind: json_kind(other),
        }),
    }
}
