//! SeaORM entities backing the catalog and cart tables.

pub mod cart;
pub mod cart_category;
pub mod product;

pub use cart::Entity as CartEntity;
pub use cart_category::Entity as CartCategoryEntity;
pub use product::Entity as ProductEntity;
