use crate::{
    abstract_trait::SchemaRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::{error, info};

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) UNIQUE NOT NULL,
    password VARCHAR(255) NOT NULL,
    role VARCHAR(16) NOT NULL DEFAULT 'user' CHECK (role IN ('user', 'admin')),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    price NUMERIC(10, 2) NOT NULL,
    user_id INT REFERENCES users (id),
    is_deleted BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

#[derive(Clone)]
pub struct SchemaRepository {
    db: ConnectionPool,
}

impl SchemaRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchemaRepositoryTrait for SchemaRepository {
    async fn create_tables(&self) -> Result<(), RepositoryError> {
        info!("🗄️ Creating users and products tables if absent");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        sqlx::query(CREATE_USERS_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to create users table: {e:?}");
                RepositoryError::from(e)
            })?;

        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to create products table: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
