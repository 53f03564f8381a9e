//! Domain shapes exchanged between handlers, services and repositories.

pub mod cart;
pub mod product;

pub use cart::{Cart, Category};
pub use product::Product;
