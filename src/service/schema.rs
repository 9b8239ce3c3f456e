use crate::{
    abstract_trait::{DynSchemaRepository, SchemaServiceTrait},
    domain::response::MessageResponse,
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct SchemaService {
    repository: DynSchemaRepository,
}

impl SchemaService {
    pub fn new(repository: DynSchemaRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SchemaServiceTrait for SchemaService {
    async fn create_tables(&self) -> Result<MessageResponse, ServiceError> {
        self.repository.create_tables().await?;

        info!("✅ Tables are in place");
        Ok(MessageResponse::new("Tables created successfully"))
    }
}
