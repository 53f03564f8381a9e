pub mod cart_service;
pub mod product_service;

pub use cart_service::{first_cart_for_customer, CartService};
pub use product_service::{merge_product, ProductService};
