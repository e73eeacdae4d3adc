// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id < 0 {
            Err(DomainError::Validation(
                "user id must be a non-negative integer".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    /// Parse a raw route parameter into an id. Trims surrounding whitespace,
    /// then distinguishes an empty parameter from one that is not a
    /// non-negative integer (negative, fractional, or non-numeric).
    pub fn parse_param(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("user id is required".into()));
        }
        trimmed
            .parse::<i64>()
            .map_err(|_| {
                DomainError::Validation("user id must be a non-negative integer".into())
            })
            .and_then(Self::new)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An email address with the basic `local@domain.tld` shape, held lowercased
/// so that equality and storage lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !has_email_shape(&value) {
            return Err(DomainError::Validation(
                "email must look like local@domain.tld".into(),
            ));
        }
        Ok(Self(value.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Parse an ISO `YYYY-MM-DD` string. The digit pattern alone would admit
    /// values like "2024-13-40"; `NaiveDate` cannot represent those, so the
    /// calendar check happens here as well.
    pub fn parse(value: &str) -> DomainResult<Self> {
        if !has_iso_date_shape(value) {
            return Err(DomainError::Validation(
                "date of birth must be an ISO date (YYYY-MM-DD)".into(),
            ));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DomainError::Validation("date of birth is not a calendar date".into()))
    }

    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format("%Y-%m-%d").fmt(f)
    }
}

/// Structural email check: one `@`, a non-empty local part, a dot inside the
/// domain with characters on both sides, and no whitespace anywhere.
pub(crate) fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(idx, _)| idx > 0 && idx < domain.len() - 1)
}

/// `\d{4}-\d{2}-\d{2}` without pulling in a regex engine.
pub(crate) fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit())
}
