use crate::model::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    pub password: String,

    /// Omitted role falls back to `user`.
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,

    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_without_role_defaults_to_user() {
        let body = r#"{"name":"A","email":"a@x.com","password":"p"}"#;
        let request: SignupRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.role, UserRole::User);
    }

    #[test]
    fn signup_accepts_admin_role() {
        let body = r#"{"name":"A","email":"a@x.com","password":"p","role":"admin"}"#;
        let request: SignupRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.role, UserRole::Admin);
    }
}
