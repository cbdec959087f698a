//! User record field vocabulary.

use std::fmt;

/// A field of the user record, by its wire name.
///
/// Policies are written in terms of this enum so a typo in a field list is
/// a compile error rather than a silent leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Email,
    Name,
    Password,
    PasswordHash,
    ResetToken,
    ResetTokenExpires,
    FailedLoginAttempts,
    LockedUntil,
    IsAdmin,
    CoupleId,
    Role,
    CreatedAt,
}

impl UserField {
    pub const ALL: &'static [UserField] = &[
        UserField::Id,
        UserField::Email,
        UserField::Name,
        UserField::Password,
        UserField::PasswordHash,
        UserField::ResetToken,
        UserField::ResetTokenExpires,
        UserField::FailedLoginAttempts,
        UserField::LockedUntil,
        UserField::IsAdmin,
        UserField::CoupleId,
        UserField::Role,
        UserField::CreatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Email => "email",
            UserField::Name => "name",
            UserField::Password => "password",
            UserField::PasswordHash => "password_hash",
            UserField::ResetToken => "reset_token",
            UserField::ResetTokenExpires => "reset_token_expires",
            UserField::FailedLoginAttempts => "failed_login_attempts",
            UserField::LockedUntil => "locked_until",
            UserField::IsAdmin => "is_admin",
            UserField::CoupleId => "couple_id",
            UserField::Role => "role",
            UserField::CreatedAt => "created_at",
        }
    }

    /// Look a field up by wire name.
    pub fn from_name(name: &str) -> Option<UserField> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl AsRef<str> for UserField {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for field in UserField::ALL {
            assert_eq!(UserField::from_name(field.as_str()), Some(*field));
        }
        assert_eq!(UserField::from_name("internal_field"), None);
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<&str> = UserField::ALL.iter().map(|f| f.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), UserField::ALL.len());
    }
}
