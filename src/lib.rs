//! User directory REST backend: CRUD over a single user record, served with
//! axum and stored in PostgreSQL behind a repository trait.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
