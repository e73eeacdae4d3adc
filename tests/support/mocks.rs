// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use user_directory::domain::errors::{DomainError, DomainResult};
use user_directory::domain::user::{EmailAddress, User, UserDraft, UserId, UserRepository};

/// An in-memory stand-in for the PostgreSQL repository with the same
/// observable behavior: auto-incrementing ids, exact-match email lookup,
/// case-insensitive substring search, first-name ordering.
pub struct InMemoryUserRepo {
    inner: Mutex<Store>,
}

struct Store {
    users: Vec<User>,
    next_id: i64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Store {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

fn matches_search(user: &User, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    user.first_name.to_lowercase().contains(&needle)
        || user.last_name.to_lowercase().contains(&needle)
        || user.email.as_str().contains(&needle)
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.len() as u64)
    }

    async fn list_page(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<User>, u64)> {
        let store = self.inner.lock().unwrap();

        let mut matching: Vec<User> = store
            .users
            .iter()
            .filter(|user| match search.map(str::trim) {
                Some(needle) if !needle.is_empty() => matches_search(user, needle),
                _ => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.first_name
                .cmp(&b.first_name)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .users
            .iter()
            .find(|user| user.email.as_str() == email.as_str())
            .cloned())
    }

    async fn insert(&self, draft: UserDraft) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        let id = UserId::new(store.next_id)?;
        store.next_id += 1;

        let user = User {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            dob: draft.dob,
            image_url: draft.image_url,
            accepted_terms: draft.accepted_terms,
            bio: draft.bio,
        };
        store.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        let user = store
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        user.first_name = draft.first_name;
        user.last_name = draft.last_name;
        user.email = draft.email;
        user.dob = draft.dob;
        user.image_url = draft.image_url;
        user.accepted_terms = draft.accepted_terms;
        user.bio = draft.bio;

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let before = store.users.len();
        store.users.retain(|user| user.id != id);
        if store.users.len() == before {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }
}

/// Fails every operation, for exercising the 500 path.
pub struct FailingUserRepo;

fn storage_failure<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("injected storage failure".into()))
}

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        storage_failure()
    }

    async fn list_page(
        &self,
        _limit: u32,
        _offset: u32,
        _search: Option<&str>,
    ) -> DomainResult<(Vec<User>, u64)> {
        storage_failure()
    }

    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        storage_failure()
    }

    async fn find_by_email(&self, _email: &EmailAddress) -> DomainResult<Option<User>> {
        storage_failure()
    }

    async fn insert(&self, _draft: UserDraft) -> DomainResult<User> {
        storage_failure()
    }

    async fn update(&self, _id: UserId, _draft: UserDraft) -> DomainResult<User> {
        storage_failure()
    }

    async fn delete(&self, _id: UserId) -> DomainResult<()> {
        storage_failure()
    }
}
