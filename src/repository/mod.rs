use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::course::{Course, CourseUpdate, NewCourse};
use crate::models::user::{AuthToken, NewUser, User};

mod postgres;
pub use postgres::PgRepository;

#[cfg(test)]
pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError{
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence seam for the whole application. Handlers only ever talk to
/// this trait, so tests can swap the Postgres implementation for the
/// in-memory one.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>;
    async fn get_course(&self, id: Uuid) -> Result<Option<Course>, StoreError>;
    async fn insert_course(&self, new: NewCourse) -> Result<Course, StoreError>;
    /// Full-replacement update, `teacher_id` is never part of the update set.
    /// Returns `None` when no course matches `id`.
    async fn update_course(&self, id: Uuid, update: CourseUpdate) -> Result<Option<Course>, StoreError>;
    /// Returns true when a row was actually deleted.
    async fn delete_course(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn create_user(&self, new: NewUser) -> Result<User, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn insert_token(&self, token: AuthToken) -> Result<(), StoreError>;
    async fn find_user_by_token(&self, key: &str) -> Result<Option<User>, StoreError>;
    async fn find_token_for_user(&self, user_id: Uuid) -> Result<Option<AuthToken>, StoreError>;
}

pub type RepositoryState = Arc<dyn Repository>;
