// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::users::UserCommandService, dto::PageLimits, queries::users::UserQueryService,
};
use crate::domain::user::UserRepository;

/// The application's service bundle, built once at startup with the storage
/// handle and threaded into handlers through shared state.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(user_repo: Arc<dyn UserRepository>, page_limits: PageLimits) -> Self {
        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&user_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo), page_limits));

        Self {
            user_commands,
            user_queries,
        }
    }
}
