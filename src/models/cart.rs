use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A category record attached to a cart. Created together with its cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[schema(example = "outdoor")]
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A shopping cart, looked up by the customer's name.
///
/// Several carts may share a customer name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Cart {
    pub fn new(customer_name: impl Into<String>) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            categories: Vec::new(),
        }
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(Category::new(name));
        self
    }

    /// ASCII case-insensitive match on the customer name
    pub fn belongs_to(&self, customer_name: &str) -> bool {
        self.customer_name.eq_ignore_ascii_case(customer_name)
    }
}
