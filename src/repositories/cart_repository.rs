use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, LoaderTrait, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::entities::{
    cart::{self, ActiveModel as CartActiveModel, Entity as CartEntity},
    cart_category::{self, ActiveModel as CartCategoryActiveModel, Entity as CartCategoryEntity},
};
use crate::errors::ServiceError;
use crate::models::{Cart, Category};

use super::{BaseRepository, CrudRepository};

/// Repository for carts and their category records.
///
/// Carts come back in ascending id order, which is insertion order, and so
/// do the categories of each cart.
#[derive(Debug, Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn assemble(cart: cart::Model, mut categories: Vec<cart_category::Model>) -> Cart {
    categories.sort_by_key(|category| category.id);
    Cart {
        id: Some(cart.id),
        customer_name: cart.customer_name,
        categories: categories.into_iter().map(Category::from).collect(),
    }
}

async fn save_cart_row<C: ConnectionTrait>(
    conn: &C,
    id: Option<i64>,
    customer_name: String,
) -> Result<(cart::Model, bool), ServiceError> {
    let mut active_model = CartActiveModel {
        id: NotSet,
        customer_name: Set(customer_name),
    };

    match id {
        None => Ok((active_model.insert(conn).await?, false)),
        Some(id) => {
            active_model.id = Set(id);
            if CartEntity::find_by_id(id).one(conn).await?.is_some() {
                Ok((active_model.update(conn).await?, true))
            } else {
                Ok((active_model.insert(conn).await?, false))
            }
        }
    }
}

async fn save_category_row<C: ConnectionTrait>(
    conn: &C,
    cart_id: i64,
    category: Category,
) -> Result<cart_category::Model, ServiceError> {
    let mut active_model = CartCategoryActiveModel {
        id: NotSet,
        cart_id: Set(cart_id),
        name: Set(category.name),
    };

    // Only this cart's own records are updated; any other id becomes a new record
    let owned = match category.id {
        Some(id) => CartCategoryEntity::find_by_id(id)
            .filter(cart_category::Column::CartId.eq(cart_id))
            .one(conn)
            .await?
            .map(|row| row.id),
        None => None,
    };

    let saved = match owned {
        Some(id) => {
            active_model.id = Set(id);
            active_model.update(conn).await?
        }
        None => active_model.insert(conn).await?,
    };

    Ok(saved)
}

#[async_trait]
impl CrudRepository<Cart> for CartRepository {
    async fn find_all(&self) -> Result<Vec<Cart>, ServiceError> {
        let db = self.base.get_db();
        let carts = CartEntity::find()
            .order_by_asc(cart::Column::Id)
            .all(db)
            .await?;
        let categories = carts.load_many(CartCategoryEntity, db).await?;

        Ok(carts
            .into_iter()
            .zip(categories)
            .map(|(cart, categories)| assemble(cart, categories))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Cart>, ServiceError> {
        let db = self.base.get_db();
        let Some(cart) = CartEntity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let categories = cart
            .find_related(CartCategoryEntity)
            .order_by_asc(cart_category::Column::Id)
            .all(db)
            .await?;

        Ok(Some(assemble(cart, categories)))
    }

    async fn save(&self, cart: Cart) -> Result<Cart, ServiceError> {
        let txn = self.base.get_db().begin().await?;

        let (cart_row, existed) = save_cart_row(&txn, cart.id, cart.customer_name).await?;

        if existed {
            // Category records not present in the incoming cart are dropped
            let kept: Vec<i64> = cart.categories.iter().filter_map(|c| c.id).collect();
            CartCategoryEntity::delete_many()
                .filter(cart_category::Column::CartId.eq(cart_row.id))
                .filter(cart_category::Column::Id.is_not_in(kept))
                .exec(&txn)
                .await?;
        }

        let mut category_rows = Vec::with_capacity(cart.categories.len());
        for category in cart.categories {
            category_rows.push(save_category_row(&txn, cart_row.id, category).await?);
        }

        txn.commit().await?;

        Ok(assemble(cart_row, category_rows))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let txn = self.base.get_db().begin().await?;
        CartCategoryEntity::delete_many()
            .filter(cart_category::Column::CartId.eq(id))
            .exec(&txn)
            .await?;
        CartEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}
