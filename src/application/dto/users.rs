// src/application/dto/users.rs
use crate::domain::user::User;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The wire representation of a user. `dob` serializes as `YYYY-MM-DD`;
/// `bio` is omitted entirely when absent rather than serialized as null.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub image_url: String,
    pub accepted_terms: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email.into(),
            dob: user.dob.date(),
            image_url: user.image_url,
            accepted_terms: user.accepted_terms,
            bio: user.bio,
        }
    }
}

/// The listing envelope: one page of users plus the metadata the client
/// needs to render pagination, and the search term echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}
