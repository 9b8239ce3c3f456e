use crate::{
    abstract_trait::UserRepositoryTrait, config::ConnectionPool,
    domain::requests::SignupRequest, errors::RepositoryError, model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up user by email: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, role, created_at FROM users \
             WHERE email = $1 AND password = $2",
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up user by credentials: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn insert(&self, req: &SignupRequest) -> Result<(), RepositoryError> {
        info!("👤 Inserting user: {}", req.email);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("INSERT INTO users (name, email, password, role) VALUES ($1, $2, $3, $4)")
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.password)
            .bind(req.role.as_str())
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert user: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
