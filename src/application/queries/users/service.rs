// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::application::dto::PageLimits;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) page_limits: PageLimits,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, page_limits: PageLimits) -> Self {
        Self {
            user_repo,
            page_limits,
        }
    }
}
