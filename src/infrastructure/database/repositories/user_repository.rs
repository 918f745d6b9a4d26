use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{
    AddressType, CreateUserDto, DomainError, DomainResult, Region, UpdateUserDto, User,
    UserRepositoryInterface,
};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_state_to_domain(state: user::StateCode) -> Region {
    match state {
        user::StateCode::Rs => Region::RS,
        user::StateCode::Sp => Region::SP,
        user::StateCode::Rj => Region::RJ,
        user::StateCode::Ba => Region::BA,
        user::StateCode::Pa => Region::PA,
        user::StateCode::Sc => Region::SC,
    }
}

fn domain_state_to_entity(region: Region) -> user::StateCode {
    match region {
        Region::RS => user::StateCode::Rs,
        Region::SP => user::StateCode::Sp,
        Region::RJ => user::StateCode::Rj,
        Region::BA => user::StateCode::Ba,
        Region::PA => user::StateCode::Pa,
        Region::SC => user::StateCode::Sc,
    }
}

fn entity_address_type_to_domain(kind: user::AddressType) -> AddressType {
    match kind {
        user::AddressType::House => AddressType::House,
        user::AddressType::Apartment => AddressType::Apartment,
        user::AddressType::Job => AddressType::Job,
    }
}

fn domain_address_type_to_entity(kind: AddressType) -> user::AddressType {
    match kind {
        AddressType::House => user::AddressType::House,
        AddressType::Apartment => user::AddressType::Apartment,
        AddressType::Job => user::AddressType::Job,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        street: model.street,
        city: model.city,
        state: entity_state_to_domain(model.state),
        postal_code: model.postal_code,
        address_type: entity_address_type_to_domain(model.address_type),
        created_at: model.created_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn find_user(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn add_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            id: NotSet,
            name: Set(dto.name),
            email: Set(dto.email),
            street: Set(dto.street),
            city: Set(dto.city),
            state: Set(domain_state_to_entity(dto.state)),
            postal_code: Set(dto.postal_code),
            address_type: Set(domain_address_type_to_entity(dto.address_type)),
            created_at: Set(Utc::now()),
        };

        let created = new_user.insert(&self.db).await?;
        debug!(user_id = created.id, "Inserted user");

        Ok(user_model_to_domain(created))
    }

    async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let Some(existing) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        // created_at is store-managed and survives replacement
        let mut active: user::ActiveModel = existing.into();
        active.name = Set(dto.name);
        active.email = Set(dto.email);
        active.street = Set(dto.street);
        active.city = Set(dto.city);
        active.state = Set(domain_state_to_entity(dto.state));
        active.postal_code = Set(dto.postal_code);
        active.address_type = Set(domain_address_type_to_entity(dto.address_type));

        let updated = active.update(&self.db).await?;
        Ok(Some(user_model_to_domain(updated)))
    }

    async fn remove_user(&self, id: i32) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::user_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::memory_database;

    fn sample(name: &str) -> CreateUserDto {
        CreateUserDto {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            street: Some("Rua da Praia, 100".to_string()),
            city: Some("Porto Alegre".to_string()),
            state: Region::RS,
            postal_code: Some("90010-000".to_string()),
            address_type: AddressType::Apartment,
        }
    }

    async fn repo() -> UserRepository {
        UserRepository::new(memory_database().await)
    }

    #[tokio::test]
    async fn list_returns_every_inserted_user_in_id_order() {
        let repo = repo().await;
        for name in ["Ana", "Bruno", "Carla", "Diego", "Elisa"] {
            repo.add_user(sample(name)).await.unwrap();
        }

        let users = repo.list_users().await.unwrap();
        assert_eq!(users.len(), 5);
        assert!(users.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn add_assigns_distinct_ids() {
        let repo = repo().await;
        let a = repo.add_user(sample("Ana")).await.unwrap();
        let b = repo.add_user(sample("Bruno")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Ana");
        assert_eq!(a.address_type, AddressType::Apartment);
    }

    #[tokio::test]
    async fn find_returns_inserted_record() {
        let repo = repo().await;
        let created = repo.add_user(sample("Ana")).await.unwrap();

        let found = repo.find_user(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_missing_id_returns_none() {
        let repo = repo().await;
        assert_eq!(repo.find_user(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_keeps_created_at() {
        let repo = repo().await;
        let created = repo.add_user(sample("Ana")).await.unwrap();

        let replacement = UpdateUserDto {
            name: "Ana Souza".to_string(),
            email: "ana.souza@example.com".to_string(),
            street: None,
            city: Some("Salvador".to_string()),
            state: Region::BA,
            postal_code: None,
            address_type: AddressType::Job,
        };

        let updated = repo
            .update_user(created.id, replacement)
            .await
            .unwrap()
            .expect("user exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ana Souza");
        assert_eq!(updated.street, None);
        assert_eq!(updated.state, Region::BA);
        assert_eq!(updated.address_type, AddressType::Job);
        assert_eq!(updated.created_at, created.created_at);

        let fetched = repo.find_user(created.id).await.unwrap();
        assert_eq!(fetched, Some(updated));
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let repo = repo().await;
        let result = repo
            .update_user(7, UpdateUserDto::from(sample("Ghost")))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(repo.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_only_that_record() {
        let repo = repo().await;
        let a = repo.add_user(sample("Ana")).await.unwrap();
        let b = repo.add_user(sample("Bruno")).await.unwrap();

        repo.remove_user(a.id).await.unwrap();

        let remaining = repo.list_users().await.unwrap();
        assert_eq!(remaining, vec![b]);
    }

    #[tokio::test]
    async fn remove_missing_id_is_not_found_and_leaves_store_unchanged() {
        let repo = repo().await;
        repo.add_user(sample("Ana")).await.unwrap();

        let err = repo.remove_user(404).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
        assert_eq!(repo.list_users().await.unwrap().len(), 1);
    }
}
