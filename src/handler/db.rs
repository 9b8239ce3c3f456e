use crate::{
    abstract_trait::DynSchemaService,
    domain::response::MessageResponse,
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/DB/create-tables",
    responses(
        (status = 201, description = "Tables created", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Schema"
)]
pub async fn create_tables_handler(
    Extension(service): Extension<DynSchemaService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_tables().await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn db_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/DB/create-tables", post(create_tables_handler))
        .layer(Extension(app_state.di_container.schema_service.clone()))
}
