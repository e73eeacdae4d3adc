// src/domain/user/payload.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{has_email_shape, has_iso_date_shape};
use serde::{Deserialize, Deserializer};

pub const PAYLOAD_SHAPE_MESSAGE: &str = "Missing or invalid fields in user payload";

/// The client-supplied subset of a user record, shape-checked but not yet
/// normalized. Obtaining one through [`UserPayload::from_value`] is the only
/// supported path, so holding a `UserPayload` proves the shape contract:
/// required fields present with the right JSON types, `email` matching the
/// basic `local@domain.tld` shape, and `dob` matching `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: String,
    pub image_url: String,
    pub accepted_terms: bool,
    #[serde(default, deserialize_with = "present_string")]
    pub bio: Option<String>,
}

/// Applied only when the `bio` key is present: the value must then be a
/// string. An absent key falls back to the field default (`None`), which
/// keeps "absent" distinct from "present but null".
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl UserPayload {
    /// Shape-validate an arbitrary JSON value. Unknown extra fields are
    /// ignored; any missing or wrong-typed required field, a malformed
    /// email, or a `dob` that is not `YYYY-MM-DD` fails with a single
    /// validation message. No side effects.
    pub fn from_value(value: serde_json::Value) -> DomainResult<Self> {
        let payload: Self = serde_json::from_value(value)
            .map_err(|_| DomainError::Validation(PAYLOAD_SHAPE_MESSAGE.into()))?;
        if !has_email_shape(&payload.email) || !has_iso_date_shape(&payload.dob) {
            return Err(DomainError::Validation(PAYLOAD_SHAPE_MESSAGE.into()));
        }
        Ok(payload)
    }
}
