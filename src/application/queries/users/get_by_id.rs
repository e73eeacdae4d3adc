// src/application/queries/users/get_by_id.rs
use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

pub struct GetUserByIdQuery {
    pub id: UserId,
}

impl UserQueryService {
    pub async fn get_user_by_id(&self, query: GetUserByIdQuery) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_id(query.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
