use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::models::{Cart, Product};

use super::CrudRepository;

/// Entities that the in-memory store can hold.
pub trait Persistable: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i64>;

    /// Fills every missing identifier, including those of owned records,
    /// from the supplied generator.
    fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i64);
}

impl Persistable for Product {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i64) {
        if self.id.is_none() {
            self.id = Some(next_id());
        }
    }
}

impl Persistable for Cart {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i64) {
        if self.id.is_none() {
            self.id = Some(next_id());
        }
        for category in &mut self.categories {
            if category.id.is_none() {
                category.id = Some(next_id());
            }
        }
    }
}

#[derive(Debug)]
struct Store<T> {
    rows: BTreeMap<i64, T>,
    /// `None` once `i64::MAX` has been handed out or stored
    next_id: Option<i64>,
}

/// Process-local repository keyed by id.
///
/// Rows are returned in ascending id order. Identifier allocation happens
/// under the same write lock as the insert, so concurrent saves never share
/// an id.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    store: RwLock<Store<T>>,
}

impl<T: Persistable> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Persistable> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.rows.is_empty()
    }
}

#[async_trait]
impl<T: Persistable> CrudRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: T) -> Result<T, ServiceError> {
        let mut store = self.store.write().await;
        let Store { rows, next_id } = &mut *store;

        // Explicit ids move the counter past them
        if let (Some(id), Some(next)) = (entity.id(), *next_id) {
            if id >= next {
                *next_id = id.checked_add(1);
            }
        }

        let mut exhausted = false;
        let mut allocate = || match *next_id {
            Some(id) => {
                *next_id = id.checked_add(1);
                id
            }
            None => {
                exhausted = true;
                0
            }
        };
        entity.assign_ids(&mut allocate);

        if exhausted {
            return Err(ServiceError::InternalError(
                "identifier space exhausted".to_string(),
            ));
        }

        let id = entity.id().ok_or_else(|| {
            ServiceError::InternalError("entity left without an identifier".to_string())
        })?;
        rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.store.write().await.rows.remove(&id);
        Ok(())
    }
}
