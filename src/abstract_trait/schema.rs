use crate::{
    domain::response::MessageResponse,
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSchemaRepository = Arc<dyn SchemaRepositoryTrait + Send + Sync>;
pub type DynSchemaService = Arc<dyn SchemaServiceTrait + Send + Sync>;

#[async_trait]
pub trait SchemaRepositoryTrait {
    async fn create_tables(&self) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait SchemaServiceTrait {
    async fn create_tables(&self) -> Result<MessageResponse, ServiceError>;
}
