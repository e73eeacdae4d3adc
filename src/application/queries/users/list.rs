// src/application/queries/users/list.rs
use super::UserQueryService;
use crate::application::{
    dto::{PageRequest, UserPage},
    error::ApplicationResult,
};

pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
}

impl UserQueryService {
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<UserPage> {
        let request = PageRequest::normalize(query.page, query.limit, self.page_limits);

        let (users, total) = self
            .user_repo
            .list_page(request.limit, request.offset(), query.q.as_deref())
            .await?;

        Ok(UserPage {
            users: users.into_iter().map(Into::into).collect(),
            total,
            page: request.page,
            total_pages: request.total_pages(total),
            q: query.q,
        })
    }
}
