mod auth;
mod product;

pub use self::auth::{LoginRequest, SignupRequest};
pub use self::product::CreateProductRequest;
