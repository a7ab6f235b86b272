//! User entity model and DTOs.

use pm_core::identity::Entity;
use pm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `app_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl Entity for User {
    const NAME: &'static str = "User";
    fn id(&self) -> Option<DbId> {
        Some(self.id)
    }
}

impl Entity for CreateUser {
    const NAME: &'static str = "User";
    fn id(&self) -> Option<DbId> {
        None
    }
}
