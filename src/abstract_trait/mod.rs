mod auth;
mod product;
mod schema;

pub use self::auth::{AuthServiceTrait, DynAuthService, DynUserRepository, UserRepositoryTrait};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::schema::{
    DynSchemaRepository, DynSchemaService, SchemaRepositoryTrait, SchemaServiceTrait,
};
