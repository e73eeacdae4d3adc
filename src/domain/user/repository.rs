// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{User, UserDraft};
use crate::domain::user::value_objects::{EmailAddress, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    /// Return one page of users plus the pre-pagination total of matching
    /// records. `search` filters case-insensitively on first name, last name,
    /// or email; ordering is first name ascending with id as tiebreak so
    /// pagination is stable across calls.
    async fn list_page(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<User>, u64)>;

    /// A simple miss is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Exact match on the stored (lowercased) email.
    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    async fn insert(&self, draft: UserDraft) -> DomainResult<User>;

    /// Replace every mutable field of the record with `id`. Fails with
    /// `NotFound` when no such record exists.
    async fn update(&self, id: UserId, draft: UserDraft) -> DomainResult<User>;

    /// Physical removal. Fails with `NotFound` when the id is absent, and
    /// keeps failing the same way on repeats.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
