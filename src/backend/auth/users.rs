/**
 * User Model and Store Adapters
 *
 * This module holds the user record, the `UserStore` trait the handlers talk
 * to, and two implementations: `PgUserStore` on PostgreSQL and
 * `MemoryUserStore` on an in-process map.
 *
 * Both enforce username uniqueness at insert time and report a collision as
 * `StoreError::DuplicateKey`, which is what closes the gap between the
 * register pre-check and the insert.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// User struct representing a stored user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, case-sensitive)
    pub usuario: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// User record without the password hash, safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: Uuid,
    pub usuario: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            usuario: user.usuario,
        }
    }
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another user already holds this username
    #[error("username already exists: {usuario}")]
    DuplicateKey { usuario: String },

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations the auth flow needs
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by exact username
    async fn find_by_username(&self, usuario: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by id, without the password hash
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PublicUser>, StoreError>;

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if the username is taken.
    async fn insert(&self, usuario: &str, password_hash: &str) -> Result<User, StoreError>;
}

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, usuario: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, usuario, password_hash, created_at
            FROM users
            WHERE usuario = $1
            "#,
        )
        .bind(usuario)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PublicUser>, StoreError> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, usuario
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, usuario: &str, password_hash: &str) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, usuario, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, usuario, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(usuario)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateKey {
                    usuario: usuario.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory user store
///
/// Keeps users in a map keyed by id. Username uniqueness is checked under
/// the write lock, so concurrent inserts of the same name cannot both win.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, usuario: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.usuario == usuario).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PublicUser>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned().map(PublicUser::from))
    }

    async fn insert(&self, usuario: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.usuario == usuario) {
            return Err(StoreError::DuplicateKey {
                usuario: usuario.to_string(),
            });
        }

        let user = User {
            id: Uuid::new_v4(),
            usuario: usuario.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
