mod auth;
mod product;
mod schema;

pub use self::auth::AuthService;
pub use self::product::ProductService;
pub use self::schema::SchemaService;
