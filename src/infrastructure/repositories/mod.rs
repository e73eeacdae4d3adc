// src/infrastructure/repositories/mod.rs
mod postgres_user;

pub use postgres_user::PostgresUserRepository;

use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";

/// Translate sqlx errors into domain terms. Known constraint violations get
/// specific messages; everything else is a persistence failure whose detail
/// stays server-side.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
