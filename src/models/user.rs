use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct User{
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2 hash, never the plain password.
    pub password: String,
}

pub struct NewUser{
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Opaque bearer credential. Each account has exactly one, minted at signup.
#[derive(Debug, Clone, FromRow)]
pub struct AuthToken{
    pub key: String,
    pub user_id: Uuid,
    pub created: DateTime<Utc>,
}
