use std::sync::Arc;

use tracing::debug;

use crate::users::dto::UserRequest;
use crate::users::error::UserError;
use crate::users::password::hash_password;
use crate::users::repo::{NewUser, User, UserPatch, UserRepository};

/// Business rules for the user slice: password hashing on writes, identifier
/// assignment from the request path, plain delegation everywhere else.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, request: UserRequest) -> Result<User, UserError> {
        let password = hash_password(&request.password)
            .map_err(|e| UserError::Hashing(e.to_string()))?;
        let user = self
            .repo
            .create(NewUser {
                email: request.email,
                password,
            })
            .await?;
        debug!(user_id = user.id, "user created");
        Ok(user)
    }

    pub async fn get(&self, id: i64) -> Result<User, UserError> {
        self.repo.get(id).await
    }

    /// The path-derived `id` wins over anything the body might carry. An
    /// empty password means "keep the stored hash"; a non-empty one is
    /// rehashed and replaces it.
    pub async fn update(&self, id: i64, request: UserRequest) -> Result<User, UserError> {
        let password = if request.password.is_empty() {
            None
        } else {
            Some(hash_password(&request.password).map_err(|e| UserError::Hashing(e.to_string()))?)
        };
        self.repo
            .update(
                id,
                UserPatch {
                    email: request.email,
                    password,
                },
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), UserError> {
        self.repo.delete(id).await
    }
}
