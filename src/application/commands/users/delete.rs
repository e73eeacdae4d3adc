// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::application::error::ApplicationResult;
use crate::domain::user::UserId;

pub struct DeleteUserCommand {
    pub id: UserId,
}

impl UserCommandService {
    /// Physical removal. A repeat delete of the same id reports not-found
    /// again rather than silently succeeding.
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        self.user_repo.delete(command.id).await?;
        Ok(())
    }
}
