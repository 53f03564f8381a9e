pub mod carts;
pub mod common;
pub mod products;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::models::{Cart, Product};
use crate::repositories::{CartRepository, CrudRepository, InMemoryRepository, ProductRepository};
use crate::services::{CartService, ProductService};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<ProductService>,
    pub carts: Arc<CartService>,
}

impl AppServices {
    pub fn new(
        product_repository: Arc<dyn CrudRepository<Product>>,
        cart_repository: Arc<dyn CrudRepository<Cart>>,
    ) -> Self {
        Self {
            products: Arc::new(ProductService::new(product_repository)),
            carts: Arc::new(CartService::new(cart_repository)),
        }
    }

    /// Services over the SeaORM repositories
    pub fn with_database(db: Arc<DatabaseConnection>) -> Self {
        Self::new(
            Arc::new(ProductRepository::new(db.clone())),
            Arc::new(CartRepository::new(db)),
        )
    }

    /// Services over process-local storage; contents are lost on exit
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Product>::new()),
            Arc::new(InMemoryRepository::<Cart>::new()),
        )
    }
}
