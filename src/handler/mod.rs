mod auth;
mod db;
mod product;

use crate::{state::AppState, utils::shutdown_signal};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::db::db_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        db::create_tables_handler,

        auth::signup_user_handler,
        auth::login_user_handler,

        product::create_product_handler,
        product::soft_delete_product_handler,
        product::get_products_handler,
    ),
    tags(
        (name = "Schema", description = "Table bootstrap endpoint"),
        (name = "User", description = "Signup and login endpoints"),
        (name = "Product", description = "Product endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(db_routes(shared_state.clone()))
            .merge(auth_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
