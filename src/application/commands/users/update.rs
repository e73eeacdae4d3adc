// src/application/commands/users/update.rs
use super::UserCommandService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{UserDraft, UserId, UserPayload};

pub struct UpdateUserCommand {
    pub id: UserId,
    pub payload: serde_json::Value,
}

impl UserCommandService {
    /// Full replacement of the mutable fields of an existing record. The
    /// payload is validated before storage is touched; the uniqueness check
    /// excludes the record itself so an unchanged email is not a conflict.
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let payload = UserPayload::from_value(command.payload)?;
        let draft = UserDraft::from_payload(payload)?;

        if self.user_repo.find_by_id(command.id).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        self.ensure_email_available(&draft.email, Some(command.id))
            .await?;

        let user = self.user_repo.update(command.id, draft).await?;
        Ok(user.into())
    }
}
