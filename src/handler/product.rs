use crate::{
    abstract_trait::DynProductService,
    domain::{
        requests::CreateProductRequest,
        response::{MessageResponse, ProductListItem},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn create_product_handler(
    Extension(service): Extension<DynProductService>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/products/soft-delete/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product soft deleted", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn soft_delete_product_handler(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.soft_delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Active products", body = Vec<ProductListItem>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Product"
)]
pub async fn get_products_handler(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", post(create_product_handler))
        .route("/products", get(get_products_handler))
        .route(
            "/products/soft-delete/{id}",
            patch(soft_delete_product_handler),
        )
        .layer(Extension(app_state.di_container.product_service.clone()))
}
