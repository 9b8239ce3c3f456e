use crate::{
    abstract_trait::{DynAuthService, DynProductService, DynSchemaService},
    config::ConnectionPool,
    repository::{ProductRepository, SchemaRepository, UserRepository},
    service::{AuthService, ProductService, SchemaService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub schema_service: DynSchemaService,
    pub auth_service: DynAuthService,
    pub product_service: DynProductService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("schema_service", &"SchemaService")
            .field("auth_service", &"AuthService")
            .field("product_service", &"ProductService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let schema_repository = Arc::new(SchemaRepository::new(pool.clone()));
        let user_repository = Arc::new(UserRepository::new(pool.clone()));
        let product_repository = Arc::new(ProductRepository::new(pool));

        let schema_service: DynSchemaService = Arc::new(SchemaService::new(schema_repository));
        let auth_service: DynAuthService = Arc::new(AuthService::new(user_repository));
        let product_service: DynProductService = Arc::new(ProductService::new(product_repository));

        Self {
            schema_service,
            auth_service,
            product_service,
        }
    }
}
