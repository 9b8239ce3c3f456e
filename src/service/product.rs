use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::CreateProductRequest,
        response::{MessageResponse, ProductListItem},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn create(&self, req: &CreateProductRequest) -> Result<MessageResponse, ServiceError> {
        self.repository.insert(req).await?;

        info!("✅ Product added: {}", req.name);
        Ok(MessageResponse::new("Product added successfully"))
    }

    async fn soft_delete(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        self.repository.soft_delete(id).await?;

        Ok(MessageResponse::new("Product soft deleted"))
    }

    async fn find_active(&self) -> Result<Vec<ProductListItem>, ServiceError> {
        let products = self.repository.find_active().await?;

        info!("🛒 Listing {} active products", products.len());
        Ok(products.into_iter().map(ProductListItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::ProductRepositoryTrait, errors::RepositoryError, model::Product,
    };
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};
    use tokio_test::assert_ok;

    #[derive(Default)]
    struct InMemoryProductRepository {
        products: Mutex<Vec<Product>>,
    }

    #[async_trait]
    impl ProductRepositoryTrait for InMemoryProductRepository {
        async fn insert(&self, req: &CreateProductRequest) -> Result<(), RepositoryError> {
            let mut products = self.products.lock().unwrap();
            let id = products.len() as i32 + 1;
            products.push(Product {
                id,
                name: req.name.clone(),
                description: req.description.clone(),
                price: req.price,
                user_id: req.user_id,
                is_deleted: false,
            });
            Ok(())
        }

        async fn soft_delete(&self, id: i32) -> Result<(), RepositoryError> {
            let mut products = self.products.lock().unwrap();
            if let Some(product) = products.iter_mut().find(|p| p.id == id) {
                product.is_deleted = true;
            }
            Ok(())
        }

        async fn find_active(&self) -> Result<Vec<Product>, RepositoryError> {
            let products = self.products.lock().unwrap();
            Ok(products.iter().filter(|p| !p.is_deleted).cloned().collect())
        }
    }

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::default()))
    }

    fn create_request(name: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            description: Some("test".to_string()),
            price: Decimal::new(14999, 2),
            user_id: Some(1),
        }
    }

    #[tokio::test]
    async fn created_product_shows_up_in_listing() {
        let service = service();
        let response = service.create(&create_request("Keyboard")).await.unwrap();
        assert_eq!(response.message, "Product added successfully");

        let listing = service.find_active().await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].product_name, "Keyboard");
        assert_eq!(listing[0].cost, Decimal::new(14999, 2));
    }

    #[tokio::test]
    async fn soft_deleted_product_disappears_from_listing() {
        let service = service();
        assert_ok!(service.create(&create_request("Keyboard")).await);
        assert_ok!(service.create(&create_request("Mouse")).await);

        let response = service.soft_delete(1).await.unwrap();
        assert_eq!(response.message, "Product soft deleted");

        let listing = service.find_active().await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].product_name, "Mouse");
    }

    #[tokio::test]
    async fn soft_delete_is_idempotent_and_tolerates_unknown_ids() {
        let service = service();
        assert_ok!(service.create(&create_request("Keyboard")).await);

        assert_ok!(service.soft_delete(1).await);
        assert_ok!(service.soft_delete(1).await);
        assert_ok!(service.soft_delete(999).await);

        let listing = service.find_active().await.unwrap();
        assert!(listing.is_empty());
    }
}
