// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{EmailAddress, UserId, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Reject a write that would give two live records the same email.
    /// `exclude` is the record being updated, which is always unique
    /// relative to itself.
    pub(super) async fn ensure_email_available(
        &self,
        email: &EmailAddress,
        exclude: Option<UserId>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if exclude != Some(existing.id) => {
                Err(ApplicationError::conflict("email already exists"))
            }
            _ => Ok(()),
        }
    }
}
