use axum::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::users::error::UserError;

/// Persistent user row. `password` is always a hash past the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Insert shape; the service hands over an already-hashed password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

/// Update shape. `password: None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub email: String,
    pub password: Option<String>,
}

/// Persistence seam for the user slice.
///
/// Zero rows matched or affected is the only `NotFound` signal. Implementors
/// must check it before reporting any generic storage failure, since a driver
/// can report zero rows without surfacing an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, UserError>;
    async fn get(&self, id: i64) -> Result<User, UserError>;
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, UserError>;
    async fn delete(&self, id: i64) -> Result<(), UserError>;
}

/// Production repository over a Postgres pool.
#[derive(Clone)]
pub struct PgUsers {
    db: PgPool,
}

impl PgUsers {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUsers {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING id, email, password, created_at, updated_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<User, UserError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        user.ok_or(UserError::NotFound)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, UserError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $2,
                password = COALESCE($3, password),
                updated_at = now()
            WHERE id = $1
            RETURNING id, email, password, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&patch.email)
        .bind(&patch.password)
        .fetch_optional(&self.db)
        .await?;
        user.ok_or(UserError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), UserError> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(UserError::NotFound);
        }
        Ok(())
    }
}

/// In-memory repository used by unit tests instead of a live database.
#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub(crate) struct MemoryUsers {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        rows: HashMap<i64, User>,
        next_id: i64,
    }

    #[async_trait]
    impl UserRepository for MemoryUsers {
        async fn create(&self, user: NewUser) -> Result<User, UserError> {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            let now = OffsetDateTime::now_utc();
            let row = User {
                id: inner.next_id,
                email: user.email,
                password: user.password,
                created_at: now,
                updated_at: now,
            };
            inner.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn get(&self, id: i64) -> Result<User, UserError> {
            let inner = self.inner.lock().unwrap();
            inner.rows.get(&id).cloned().ok_or(UserError::NotFound)
        }

        async fn update(&self, id: i64, patch: UserPatch) -> Result<User, UserError> {
            let mut inner = self.inner.lock().unwrap();
            let row = inner.rows.get_mut(&id).ok_or(UserError::NotFound)?;
            row.email = patch.email;
            if let Some(password) = patch.password {
                row.password = password;
            }
            row.updated_at = OffsetDateTime::now_utc();
            Ok(row.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), UserError> {
            let mut inner = self.inner.lock().unwrap();
            inner.rows.remove(&id).map(|_| ()).ok_or(UserError::NotFound)
        }
    }
}
