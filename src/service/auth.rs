use crate::{
    abstract_trait::{AuthServiceTrait, DynUserRepository},
    domain::{
        requests::{LoginRequest, SignupRequest},
        response::MessageResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct AuthService {
    repository: DynUserRepository,
}

impl AuthService {
    pub fn new(repository: DynUserRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn signup(&self, req: &SignupRequest) -> Result<MessageResponse, ServiceError> {
        info!("📝 Signup attempt for {}", req.email);

        // Best-effort pre-check; the unique constraint on email is the hard
        // guarantee under concurrent signups.
        if self.repository.find_by_email(&req.email).await?.is_some() {
            info!("⚠️ Email already registered: {}", req.email);
            return Err(ServiceError::AlreadyExists(
                "Email already exists".to_string(),
            ));
        }

        self.repository.insert(req).await?;

        info!("✅ User created: {}", req.email);
        Ok(MessageResponse::new("User created successfully"))
    }

    async fn login(&self, req: &LoginRequest) -> Result<MessageResponse, ServiceError> {
        info!("🔑 Login attempt for {}", req.email);

        match self
            .repository
            .find_by_credentials(&req.email, &req.password)
            .await?
        {
            Some(user) => {
                info!("✅ Login successful for {}", user.email);
                Ok(MessageResponse::new("Login successful"))
            }
            None => {
                info!("🚫 Invalid credentials for {}", req.email);
                Err(ServiceError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::UserRepositoryTrait,
        errors::RepositoryError,
        model::{User, UserRole},
    };
    use std::sync::{Arc, Mutex};
    use tokio_test::assert_ok;

    #[derive(Default)]
    struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.email == email).cloned())
        }

        async fn find_by_credentials(
            &self,
            email: &str,
            password: &str,
        ) -> Result<Option<User>, RepositoryError> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|u| u.email == email && u.password == password)
                .cloned())
        }

        async fn insert(&self, req: &SignupRequest) -> Result<(), RepositoryError> {
            let mut users = self.users.lock().unwrap();
            let id = users.len() as i32 + 1;
            users.push(User {
                id,
                name: req.name.clone(),
                email: req.email.clone(),
                password: req.password.clone(),
                role: req.role.as_str().to_string(),
                created_at: None,
            });
            Ok(())
        }
    }

    fn service() -> AuthService {
        AuthService::new(Arc::new(InMemoryUserRepository::default()))
    }

    fn signup_request(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: "A".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: UserRole::User,
        }
    }

    #[tokio::test]
    async fn second_signup_with_same_email_is_rejected() {
        let service = service();
        let request = signup_request("a@x.com", "p");

        let first = service.signup(&request).await.unwrap();
        assert_eq!(first.message, "User created successfully");

        let second = service.signup(&request).await;
        match second {
            Err(ServiceError::AlreadyExists(msg)) => assert_eq!(msg, "Email already exists"),
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_matches_freshly_registered_credentials() {
        let service = service();
        assert_ok!(service.signup(&signup_request("a@x.com", "p")).await);

        let response = service
            .login(&LoginRequest {
                email: "a@x.com".to_string(),
                password: "p".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.message, "Login successful");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid() {
        let service = service();
        assert_ok!(service.signup(&signup_request("a@x.com", "p")).await);

        let result = service
            .login(&LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_for_unknown_email_is_invalid() {
        let service = service();

        let result = service
            .login(&LoginRequest {
                email: "ghost@x.com".to_string(),
                password: "p".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }
}
