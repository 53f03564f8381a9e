use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::errors::ServiceError;

pub mod cart_repository;
pub mod memory;
pub mod product_repository;

pub use cart_repository::CartRepository;
pub use memory::{InMemoryRepository, Persistable};
pub use product_repository::ProductRepository;

/// Storage operations the services rely on, one implementation per entity type.
///
/// `save` assigns an identifier when the entity has none and otherwise
/// overwrites the record with the same identifier. `delete_by_id` is a no-op
/// for an unknown identifier.
#[async_trait]
pub trait CrudRepository<T: Send + 'static>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, ServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ServiceError>;

    async fn save(&self, entity: T) -> Result<T, ServiceError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// Shared connection holder for the SeaORM repositories
#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
