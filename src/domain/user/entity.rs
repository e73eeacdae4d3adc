// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::payload::UserPayload;
use crate::domain::user::value_objects::{DateOfBirth, EmailAddress, UserId};

/// A stored user record. The id is assigned by the storage layer on insert
/// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub dob: DateOfBirth,
    pub image_url: String,
    pub accepted_terms: bool,
    pub bio: Option<String>,
}

/// A normalized payload ready for storage: the email lowercased, the date of
/// birth parsed. Used for both insert and full-replacement update.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub dob: DateOfBirth,
    pub image_url: String,
    pub accepted_terms: bool,
    pub bio: Option<String>,
}

impl UserDraft {
    /// Normalize a shape-valid payload. Consuming [`UserPayload`] here keeps
    /// normalization unreachable for unvalidated input.
    pub fn from_payload(payload: UserPayload) -> DomainResult<Self> {
        let UserPayload {
            first_name,
            last_name,
            email,
            dob,
            image_url,
            accepted_terms,
            bio,
        } = payload;

        Ok(Self {
            first_name,
            last_name,
            email: EmailAddress::new(email)?,
            dob: DateOfBirth::parse(&dob)?,
            image_url,
            accepted_terms,
            bio,
        })
    }
}
