// src/application/commands/users/create.rs
use super::UserCommandService;
use crate::application::{dto::UserDto, error::ApplicationResult};
use crate::domain::user::{UserDraft, UserPayload};

/// The raw request body, still untyped: shape validation is this command's
/// first step, so callers never pre-inspect it.
pub struct CreateUserCommand {
    pub payload: serde_json::Value,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let payload = UserPayload::from_value(command.payload)?;
        let draft = UserDraft::from_payload(payload)?;

        self.ensure_email_available(&draft.email, None).await?;

        let user = self.user_repo.insert(draft).await?;
        Ok(user.into())
    }
}
