// src/services/auth_service.rs
// DOCUMENTATION: Authentication service stub
// PURPOSE: Wired into the application but carries no credential logic yet

use crate::errors::AppError;
use crate::models::{LoginRequest, RegisterRequest};
use sqlx::PgPool;

pub struct AuthService;

impl AuthService {
    /// Register a new account
    /// No credential handling exists yet; the endpoint reports 501
    pub async fn register(_pool: &PgPool, _req: RegisterRequest) -> Result<(), AppError> {
        Err(AppError::NotImplemented(
            "account registration is not implemented".to_string(),
        ))
    }

    /// Authenticate with email and password
    /// No token issuance or password checking exists yet; the endpoint reports 501
    pub async fn login(_pool: &PgPool, _req: LoginRequest) -> Result<(), AppError> {
        Err(AppError::NotImplemented(
            "login is not implemented".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{error::ResponseError, http::StatusCode};

    #[tokio::test]
    async fn test_register_reports_not_implemented() {
        let req = RegisterRequest {
            name: "Jonas".to_string(),
            email: "jonas@example.com".to_string(),
            password: "123".to_string(),
        };

        // No pool is needed: the stub fails before touching the database
        let err = AuthService::register(&sqlx::PgPool::connect_lazy("postgres://x").unwrap(), req)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn test_login_reports_not_implemented() {
        let req = LoginRequest {
            email: "jonas@example.com".to_string(),
            password: "123".to_string(),
        };

        let err = AuthService::login(&sqlx::PgPool::connect_lazy("postgres://x").unwrap(), req)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_IMPLEMENTED);
    }
}
