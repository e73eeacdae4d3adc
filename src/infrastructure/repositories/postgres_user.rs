// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{DateOfBirth, EmailAddress, User, UserDraft, UserId, UserRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str =
    "id, first_name, last_name, email, dob, image_url, accepted_terms, bio";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Turn a raw search term into an ILIKE pattern that matches the term
    /// literally: wildcards in the input are escaped, the whole term is
    /// wrapped for substring matching. Blank input means no filter.
    fn normalize_search(search: Option<&str>) -> Option<String> {
        search.and_then(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(format!("%{}%", escape_like(trimmed)))
            }
        })
    }

    fn push_search_filter(builder: &mut QueryBuilder<'_, Postgres>, pattern: &str) {
        builder.push(" WHERE first_name ILIKE ");
        builder.push_bind(pattern.to_owned());
        builder.push(" OR last_name ILIKE ");
        builder.push_bind(pattern.to_owned());
        builder.push(" OR email ILIKE ");
        builder.push_bind(pattern.to_owned());
    }
}

/// Escape `%`, `_`, and `\` so a user-supplied term cannot act as a LIKE
/// wildcard.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    dob: NaiveDate,
    image_url: String,
    accepted_terms: bool,
    bio: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            first_name: row.first_name,
            last_name: row.last_name,
            email: EmailAddress::new(row.email)?,
            dob: DateOfBirth::from_date(row.dob),
            image_url: row.image_url,
            accepted_terms: row.accepted_terms,
            bio: row.bio,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<User>, u64)> {
        let pattern = Self::normalize_search(search);

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM users");
        if let Some(pattern) = pattern.as_deref() {
            Self::push_search_filter(&mut count_builder, pattern);
        }
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)? as u64;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users"));
        if let Some(pattern) = pattern.as_deref() {
            Self::push_search_filter(&mut builder, pattern);
        }
        builder.push(" ORDER BY first_name ASC, id ASC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn insert(&self, draft: UserDraft) -> DomainResult<User> {
        let UserDraft {
            first_name,
            last_name,
            email,
            dob,
            image_url,
            accepted_terms,
            bio,
        } = draft;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (first_name, last_name, email, dob, image_url, accepted_terms, bio)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(first_name)
        .bind(last_name)
        .bind(email.as_str())
        .bind(dob.date())
        .bind(image_url)
        .bind(accepted_terms)
        .bind(bio)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> DomainResult<User> {
        let UserDraft {
            first_name,
            last_name,
            email,
            dob,
            image_url,
            accepted_terms,
            bio,
        } = draft;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users
             SET first_name = $2, last_name = $3, email = $4, dob = $5,
                 image_url = $6, accepted_terms = $7, bio = $8
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(first_name)
        .bind(last_name)
        .bind(email.as_str())
        .bind(dob.date())
        .bind(image_url)
        .bind(accepted_terms)
        .bind(bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }

        Ok(())
    }
}
