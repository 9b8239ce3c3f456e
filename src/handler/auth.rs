use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{LoginRequest, SignupRequest},
        response::MessageResponse,
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "User and product API built with Axum, Postgres, and SQLx";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/user/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Email already exists", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn signup_user_handler(
    Extension(service): Extension<DynAuthService>,
    Json(body): Json<SignupRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.signup(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = MessageResponse),
        (status = 400, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/user/signup", post(signup_user_handler))
        .route("/user/login", post(login_user_handler))
        .route("/healthchecker", get(health_checker_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
