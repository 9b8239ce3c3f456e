use crate::{
    domain::{
        requests::{LoginRequest, SignupRequest},
        response::MessageResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Exact-match lookup on (email, password); credentials are compared
    /// verbatim by the store.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError>;

    async fn insert(&self, req: &SignupRequest) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn signup(&self, req: &SignupRequest) -> Result<MessageResponse, ServiceError>;

    async fn login(&self, req: &LoginRequest) -> Result<MessageResponse, ServiceError>;
}
