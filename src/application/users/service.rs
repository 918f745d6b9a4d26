//! User management service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service; the
//! not-found and id-mismatch rules live here.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserRepositoryInterface,
};

/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.repo.list_users().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<User> {
        self.repo
            .find_user(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    pub async fn create(&self, dto: CreateUserDto) -> DomainResult<User> {
        ensure_required(&dto.name, &dto.email)?;
        let user = self.repo.add_user(dto).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Replace every field of user `path_id`.
    ///
    /// `body_id` is the id carried in the request payload; it must equal
    /// `path_id` or nothing is written.
    pub async fn replace(
        &self,
        path_id: i32,
        body_id: Option<i32>,
        dto: UpdateUserDto,
    ) -> DomainResult<User> {
        if body_id != Some(path_id) {
            return Err(DomainError::IdMismatch {
                path: path_id,
                body: body_id.unwrap_or_default(),
            });
        }

        ensure_required(&dto.name, &dto.email)?;

        let user = self
            .repo
            .update_user(path_id, dto)
            .await?
            .ok_or_else(|| DomainError::user_not_found(path_id))?;

        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repo.remove_user(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}

fn ensure_required(name: &str, email: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("name: must not be blank".into()));
    }
    if email.trim().is_empty() {
        return Err(DomainError::Validation("email: must not be blank".into()));
    }
    Ok(())
}
