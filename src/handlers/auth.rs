// src/handlers/auth.rs
// DOCUMENTATION: HTTP handlers for the auth module
// PURPOSE: Route wiring for the authentication stub

use crate::errors::AppError;
use crate::models::{LoginRequest, RegisterRequest};
use crate::services::AuthService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /auth/register
/// Registration stub - reports 501 until credential logic lands
pub async fn register(
    pool: web::Data<PgPool>,
    req: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    if let Err(e) = req.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    AuthService::register(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().finish())
}

/// POST /auth/login
/// Login stub - reports 501 until credential logic lands
pub async fn login(
    pool: web::Data<PgPool>,
    req: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    if let Err(e) = req.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    AuthService::login(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Configuration for auth routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login)),
    );
}
