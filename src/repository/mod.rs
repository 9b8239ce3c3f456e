mod product;
mod schema;
mod user;

pub use self::product::ProductRepository;
pub use self::schema::SchemaRepository;
pub use self::user::UserRepository;
