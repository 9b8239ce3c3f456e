use crate::{
    abstract_trait::ProductRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateProductRequest, errors::RepositoryError, model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn insert(&self, req: &CreateProductRequest) -> Result<(), RepositoryError> {
        info!("📦 Inserting product: {}", req.name);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            "INSERT INTO products (name, description, price, user_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Soft deleting product: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Rows-affected is deliberately not inspected: tombstoning an
        // already-deleted or unknown id is a success.
        sqlx::query("UPDATE products SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to soft delete product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }

    async fn find_active(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, user_id, is_deleted FROM products \
             WHERE is_deleted = FALSE",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch active products: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(products)
    }
}
