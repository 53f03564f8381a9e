use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::{errors::ServiceError, models::Cart, repositories::CrudRepository};

/// First cart, in iteration order, whose customer name matches `customer_name`
/// ignoring ASCII case.
pub fn first_cart_for_customer<I>(carts: I, customer_name: &str) -> Option<Cart>
where
    I: IntoIterator<Item = Cart>,
{
    carts
        .into_iter()
        .find(|cart| cart.belongs_to(customer_name))
}

/// Shopping cart service.
///
/// Carts are created with their categories and looked up by customer name.
/// The lookup loads the whole collection and scans it, so when several carts
/// share a name the one the repository yields first (the oldest) wins.
#[derive(Clone)]
pub struct CartService {
    repository: Arc<dyn CrudRepository<Cart>>,
}

impl CartService {
    pub fn new(repository: Arc<dyn CrudRepository<Cart>>) -> Self {
        Self { repository }
    }

    /// Finds the first cart registered under `customer_name`
    #[instrument(skip(self))]
    pub async fn find_by_customer_name(
        &self,
        customer_name: &str,
    ) -> Result<Option<Cart>, ServiceError> {
        let carts = self.repository.find_all().await.map_err(|e| {
            error!(error = %e, "Failed to load carts for lookup");
            e
        })?;

        debug!(scanned = carts.len(), "Scanning carts for customer");
        let cart = first_cart_for_customer(carts, customer_name);

        if let Some(cart) = &cart {
            info!(cart_id = ?cart.id, "Cart found for customer");
        }
        Ok(cart)
    }

    /// Creates a cart together with its categories.
    ///
    /// Identifiers on the cart and on its categories are discarded; the
    /// repository assigns fresh ones.
    #[instrument(skip(self, cart), fields(customer_name = %cart.customer_name))]
    pub async fn create(&self, mut cart: Cart) -> Result<Cart, ServiceError> {
        cart.id = None;
        for category in &mut cart.categories {
            category.id = None;
        }

        let saved = self.repository.save(cart).await.map_err(|e| {
            error!(error = %e, "Failed to create cart");
            e
        })?;

        info!(
            cart_id = ?saved.id,
            categories = saved.categories.len(),
            "Cart created successfully"
        );
        Ok(saved)
    }

    /// Every cart in the repository's natural order
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Cart>, ServiceError> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::repositories::InMemoryRepository;
    use async_trait::async_trait;
    use mockall::mock;
    use proptest::prelude::*;
    use rstest::rstest;

    mock! {
        pub CartStore {}

        #[async_trait]
        impl CrudRepository<Cart> for CartStore {
            async fn find_all(&self) -> Result<Vec<Cart>, ServiceError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Cart>, ServiceError>;
            async fn save(&self, entity: Cart) -> Result<Cart, ServiceError>;
            async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
        }
    }

    fn stored(id: i64, customer_name: &str) -> Cart {
        Cart {
            id: Some(id),
            ..Cart::new(customer_name)
        }
    }

    async fn service_with(names: &[&str]) -> CartService {
        let service = CartService::new(Arc::new(InMemoryRepository::<Cart>::new()));
        for name in names {
            service.create(Cart::new(*name)).await.unwrap();
        }
        service
    }

    #[rstest]
    #[case("John@Doe", "john@doe", true)]
    #[case("John@Doe", "JOHN@DOE", true)]
    #[case("John@Doe", "John@Doe", true)]
    #[case("John@Doe", "John Doe", false)]
    #[case("John@Doe", "", false)]
    #[case("", "", true)]
    #[tokio::test]
    async fn lookup_ignores_ascii_case(
        #[case] stored_name: &str,
        #[case] query: &str,
        #[case] expected: bool,
    ) {
        let service = service_with(&[stored_name]).await;
        let found = service.find_by_customer_name(query).await.unwrap();
        assert_eq!(found.is_some(), expected);
    }

    #[tokio::test]
    async fn duplicate_names_return_first_inserted() {
        let service = service_with(&["Alice", "Alice"]).await;
        let all = service.list_all().await.unwrap();

        let found = service.find_by_customer_name("ALICE").await.unwrap().unwrap();

        assert_eq!(found.id, all[0].id);
        assert_ne!(found.id, all[1].id);
    }

    #[tokio::test]
    async fn lookup_scans_large_collection() {
        let repository = Arc::new(InMemoryRepository::<Cart>::new());
        for i in 0..10_000 {
            repository
                .save(Cart::new(format!("customer-{i}")))
                .await
                .unwrap();
        }
        repository.save(Cart::new("TargetCustomer")).await.unwrap();
        let service = CartService::new(repository);

        let found = service
            .find_by_customer_name("targetcustomer")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.customer_name, "TargetCustomer");
    }

    #[tokio::test]
    async fn lookup_miss_returns_none() {
        let service = service_with(&["Alice", "Bob"]).await;
        assert!(service.find_by_customer_name("Carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookup_uses_repository_order() {
        let mut store = MockCartStore::new();
        store
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![stored(3, "bob"), stored(8, "BOB"), stored(1, "Bob")]));

        let service = CartService::new(Arc::new(store));
        let found = service.find_by_customer_name("Bob").await.unwrap().unwrap();

        assert_eq!(found.id, Some(3));
    }

    #[tokio::test]
    async fn create_clears_incoming_ids() {
        let mut store = MockCartStore::new();
        store
            .expect_save()
            .withf(|cart| cart.id.is_none() && cart.categories.iter().all(|c| c.id.is_none()))
            .times(1)
            .returning(|mut cart| {
                cart.id = Some(1);
                for (i, category) in cart.categories.iter_mut().enumerate() {
                    category.id = Some(i as i64 + 10);
                }
                Ok(cart)
            });

        let service = CartService::new(Arc::new(store));
        let input = Cart {
            id: Some(77),
            customer_name: "Dana".to_string(),
            categories: vec![Category {
                id: Some(5),
                name: "garden".to_string(),
            }],
        };

        let created = service.create(input).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.categories[0].id, Some(10));
        assert_eq!(created.categories[0].name, "garden");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_for_same_customer_both_succeed() {
        let service = service_with(&[]).await;

        let (a, b) = tokio::join!(
            service.create(Cart::new("Erin")),
            service.create(Cart::new("Erin"))
        );

        let (a, b) = (a.unwrap(), b.unwrap());
        assert_ne!(a.id, b.id);
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[test]
    fn first_cart_for_customer_on_empty_collection() {
        assert!(first_cart_for_customer(Vec::new(), "anyone").is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn lookup_result_matches_query(
            names in prop::collection::vec("[A-Za-z]{1,6}", 0..20),
            query in "[A-Za-z]{1,6}",
        ) {
            let carts: Vec<Cart> = names
                .iter()
                .enumerate()
                .map(|(i, name)| stored(i as i64 + 1, name))
                .collect();

            let found = first_cart_for_customer(carts, &query);
            let expected = names.iter().position(|n| n.eq_ignore_ascii_case(&query));

            match (found, expected) {
                (Some(cart), Some(index)) => {
                    prop_assert!(cart.customer_name.eq_ignore_ascii_case(&query));
                    prop_assert_eq!(cart.id, Some(index as i64 + 1));
                }
                (None, None) => {}
                (found, expected) => {
                    prop_assert!(false, "found {:?}, expected index {:?}", found, expected);
                }
            }
        }
    }
}
