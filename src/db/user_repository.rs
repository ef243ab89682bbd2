// src/db/user_repository.rs
// DOCUMENTATION: Database access layer for users - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use sqlx::PgPool;
use uuid::Uuid;

/// UserRepository: All database operations for users
/// DOCUMENTATION: Uses query_as for type-safe SQL queries
pub struct UserRepository;

impl UserRepository {
    /// Create new user in database
    /// DOCUMENTATION: Inserts user and returns created record
    /// Used by POST /users endpoint
    pub async fn create(pool: &PgPool, req: &CreateUserRequest) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, name, email, password, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create user: {}", e);
            AppError::from_sqlx(e, &format!("User with email '{}'", req.email))
        })?;

        log::info!("Created user with id: {}", user.id);
        Ok(user)
    }

    /// List all users
    /// DOCUMENTATION: Used for GET /users endpoint
    /// Returns rows in insertion order, unmodified
    pub async fn find_all(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list users: {}", e);
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(users)
    }

    /// Retrieve user by ID
    /// DOCUMENTATION: Used for GET /users/{id} endpoint
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching user {}: {}", id, e);
            AppError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("User not found: {}", id);
            AppError::NotFound(format!("User with id '{}'", id))
        })?;

        Ok(user)
    }

    /// Update existing user
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateUserRequest,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                password = COALESCE($3, password),
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, email, password, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for user {}: {}", id, e);
            AppError::from_sqlx(e, "User with this email")
        })?
        .ok_or_else(|| {
            log::warn!("User not found for update: {}", id);
            AppError::NotFound(format!("User with id '{}'", id))
        })?;

        log::info!("Updated user: {}", id);
        Ok(user)
    }

    /// Delete user
    /// DOCUMENTATION: Physical deletion; NotFound when no row matched
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
        let rows = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for user {}: {}", id, e);
                AppError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NotFound(format!("User with id '{}'", id)));
        }

        log::info!("Deleted user: {}", id);
        Ok(())
    }
}
