use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;

use crate::entities::product::{
    self, ActiveModel as ProductActiveModel, Attributes, CategoryLabels, Column,
    Entity as ProductEntity,
};
use crate::errors::ServiceError;
use crate::models::Product;

use super::{BaseRepository, CrudRepository};

/// Repository for products stored in the `products` table
#[derive(Debug, Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CrudRepository<Product> for ProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = ProductEntity::find()
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let row = ProductEntity::find_by_id(id)
            .one(self.base.get_db())
            .await?;

        Ok(row.map(Product::from))
    }

    async fn save(&self, product: Product) -> Result<Product, ServiceError> {
        let db = self.base.get_db();
        let id = product.id;

        let mut active_model = ProductActiveModel {
            id: NotSet,
            name: Set(product.name),
            price: Set(product.price),
            categories: Set(CategoryLabels(product.categories)),
            attributes: Set(Attributes(product.attributes)),
        };

        let saved: product::Model = match id {
            None => active_model.insert(db).await?,
            Some(id) => {
                active_model.id = Set(id);
                if ProductEntity::find_by_id(id).one(db).await?.is_some() {
                    active_model.update(db).await?
                } else {
                    active_model.insert(db).await?
                }
            }
        };

        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        ProductEntity::delete_by_id(id)
            .exec(self.base.get_db())
            .await?;
        Ok(())
    }
}
