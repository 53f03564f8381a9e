use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A catalog product.
///
/// `id` is `None` until the product has been persisted; the repository
/// assigns it on first save and it never changes afterwards. Price is not
/// validated, so zero and negative values are stored as given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(default)]
    #[schema(example = 42)]
    pub id: Option<i64>,
    #[serde(default)]
    #[schema(example = "Trail running shoe")]
    pub name: String,
    #[serde(default)]
    #[schema(example = 89.5)]
    pub price: f64,
    /// Category labels in the order given; duplicates are kept
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-form attributes, one value per key
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Default::default()
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
