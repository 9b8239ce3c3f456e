use crate::{
    domain::{
        requests::CreateProductRequest,
        response::{MessageResponse, ProductListItem},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn insert(&self, req: &CreateProductRequest) -> Result<(), RepositoryError>;

    /// Tombstones the row. Matching zero rows is not an error.
    async fn soft_delete(&self, id: i32) -> Result<(), RepositoryError>;

    async fn find_active(&self) -> Result<Vec<Product>, RepositoryError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<MessageResponse, ServiceError>;

    async fn soft_delete(&self, id: i32) -> Result<MessageResponse, ServiceError>;

    async fn find_active(&self) -> Result<Vec<ProductListItem>, ServiceError>;
}
