use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::{errors::ServiceError, models::Product, repositories::CrudRepository};

/// Builds the replacement record for an update.
///
/// Name, price, categories and attributes come from `patch`; the identifier
/// stays the one of `existing`.
pub fn merge_product(existing: Product, patch: Product) -> Product {
    Product {
        id: existing.id,
        name: patch.name,
        price: patch.price,
        categories: patch.categories,
        attributes: patch.attributes,
    }
}

/// Service for managing catalog products
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn CrudRepository<Product>>,
}

impl ProductService {
    /// Creates a new product service instance
    pub fn new(repository: Arc<dyn CrudRepository<Product>>) -> Self {
        Self { repository }
    }

    /// Every stored product, in the order the repository yields them
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ServiceError> {
        let products = self.repository.find_all().await.map_err(|e| {
            error!(error = %e, "Failed to list products");
            e
        })?;

        info!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Get a product by ID; `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        self.repository.find_by_id(id).await.map_err(|e| {
            error!(product_id = id, error = %e, "Database error when fetching product");
            e
        })
    }

    /// Create a new product. Any identifier on the input is discarded.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, mut product: Product) -> Result<Product, ServiceError> {
        product.id = None;

        let saved = self.repository.save(product).await.map_err(|e| {
            error!(error = %e, "Failed to create product");
            e
        })?;

        info!(product_id = ?saved.id, "Product created successfully");
        Ok(saved)
    }

    /// Replace the mutable fields of an existing product
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: Product) -> Result<Product, ServiceError> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            warn!(product_id = id, "Product not found for update");
            return Err(ServiceError::NotFound(format!(
                "Product with ID {} not found",
                id
            )));
        };

        let updated = self
            .repository
            .save(merge_product(existing, patch))
            .await
            .map_err(|e| {
                error!(product_id = id, error = %e, "Failed to update product");
                e
            })?;

        info!(product_id = id, "Product updated successfully");
        Ok(updated)
    }

    /// Delete a product; unknown ids are ignored
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repository.delete_by_id(id).await.map_err(|e| {
            error!(product_id = id, error = %e, "Failed to delete product");
            e
        })?;

        info!(product_id = id, "Product deleted");
        Ok(())
    }
}
