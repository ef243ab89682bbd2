// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for user operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest};
use crate::services::UserService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// POST /users
/// Create a new user
pub async fn create_user(
    pool: web::Data<PgPool>,
    req: web::Json<CreateUserRequest>,
) -> Result<impl Responder, AppError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    let user = UserService::create(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// GET /users
/// List all users
pub async fn list_users(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let users = UserService::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
/// Retrieve a user by ID
pub async fn get_user(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let user = UserService::find_one(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /users/{id}
/// Update a user
pub async fn update_user(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
) -> Result<impl Responder, AppError> {
    if let Err(e) = req.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    let user = UserService::update(pool.get_ref(), path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /users/{id}
/// Delete a user
pub async fn delete_user(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    UserService::remove(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}
