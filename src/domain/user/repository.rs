use async_trait::async_trait;

use super::{CreateUserDto, UpdateUserDto, User};
use crate::domain::DomainResult;

/// Persistence port for the User aggregate.
///
/// Every mutating call is committed before it returns.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// All users ordered by id.
    async fn list_users(&self) -> DomainResult<Vec<User>>;
    async fn find_user(&self, id: i32) -> DomainResult<Option<User>>;

    async fn add_user(&self, dto: CreateUserDto) -> DomainResult<User>;
    /// Returns `None` when no user has this id.
    async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>>;
    /// Fails with `DomainError::NotFound` when no user has this id.
    async fn remove_user(&self, id: i32) -> DomainResult<()>;
}
