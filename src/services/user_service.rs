// src/services/user_service.rs
// DOCUMENTATION: Business logic for users
// PURPOSE: Intermediary between handlers and repository

use crate::db::UserRepository;
use crate::errors::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserService;

impl UserService {
    /// Create a new user
    /// The DTO is forwarded to the repository unmodified
    pub async fn create(pool: &PgPool, req: CreateUserRequest) -> Result<UserResponse, AppError> {
        let user = UserRepository::create(pool, &req).await?;
        Ok(user.to_response())
    }

    /// List all users, preserving repository order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<UserResponse>, AppError> {
        let users = UserRepository::find_all(pool).await?;
        Ok(users.iter().map(|u| u.to_response()).collect())
    }

    /// Get a user by ID
    pub async fn find_one(pool: &PgPool, id: Uuid) -> Result<UserResponse, AppError> {
        let user = UserRepository::find_by_id(pool, id).await?;
        Ok(user.to_response())
    }

    /// Update a user
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let user = UserRepository::update(pool, id, &req).await?;
        Ok(user.to_response())
    }

    /// Delete a user
    pub async fn remove(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
        UserRepository::delete(pool, id).await
    }
}
