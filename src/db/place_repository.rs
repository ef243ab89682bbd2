// src/db/place_repository.rs
// DOCUMENTATION: Database access layer for places - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::AppError;
use crate::models::Place;
use sqlx::PgPool;
use uuid::Uuid;

/// PlaceRepository: All database operations for places
/// DOCUMENTATION: Uses query_as for type-safe SQL queries
pub struct PlaceRepository;

impl PlaceRepository {
    /// Create new place in database
    /// DOCUMENTATION: Inserts place and returns created record
    /// Image URLs are resolved by the service layer before this call
    pub async fn create(
        pool: &PgPool,
        name: &str,
        place_type: &str,
        phone: Option<&str>,
        latitude: f64,
        longitude: f64,
        images: &[String],
    ) -> Result<Place, AppError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            INSERT INTO places (name, place_type, phone, latitude, longitude, images, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING id, name, place_type, phone, latitude, longitude, images, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(place_type)
        .bind(phone)
        .bind(latitude)
        .bind(longitude)
        .bind(images)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create place: {}", e);
            AppError::DatabaseError(e.to_string())
        })?;

        log::info!("Created place with id: {}", place.id);
        Ok(place)
    }

    /// List all places
    /// DOCUMENTATION: Used for GET /places endpoint
    /// Returns rows in insertion order, unmodified
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Place>, AppError> {
        let places = sqlx::query_as::<_, Place>(
            r#"
            SELECT id, name, place_type, phone, latitude, longitude, images, created_at, updated_at
            FROM places
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list places: {}", e);
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(places)
    }

    /// List one page of places
    /// DOCUMENTATION: Used for GET /places/paginated endpoint
    /// Returns tuple: (results, total_count) for pagination
    pub async fn find_paginated(
        pool: &PgPool,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Place>, i64), AppError> {
        let offset = page.saturating_sub(1).saturating_mul(limit);

        let count_result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Count query error: {}", e);
                AppError::DatabaseError(e.to_string())
            })?;

        let places = sqlx::query_as::<_, Place>(
            r#"
            SELECT id, name, place_type, phone, latitude, longitude, images, created_at, updated_at
            FROM places
            ORDER BY created_at ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Paginated query error: {}", e);
            AppError::DatabaseError(e.to_string())
        })?;

        log::debug!(
            "Paginated listing: {} results, {} total (page {})",
            places.len(),
            count_result.0,
            page
        );

        Ok((places, count_result.0))
    }

    /// Retrieve place by ID
    /// DOCUMENTATION: Used by the service layer before update/remove
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Place, AppError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            SELECT id, name, place_type, phone, latitude, longitude, images, created_at, updated_at
            FROM places
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching place {}: {}", id, e);
            AppError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Place not found: {}", id);
            AppError::NotFound(format!("Place with id '{}'", id))
        })?;

        Ok(place)
    }

    /// Update existing place
    /// DOCUMENTATION: Partial update - only provided fields are modified
    /// The images array always carries the full resolved list from the service
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        name: Option<&str>,
        place_type: Option<&str>,
        phone: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        images: &[String],
    ) -> Result<Place, AppError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            UPDATE places
            SET name = COALESCE($1, name),
                place_type = COALESCE($2, place_type),
                phone = COALESCE($3, phone),
                latitude = COALESCE($4, latitude),
                longitude = COALESCE($5, longitude),
                images = $6,
                updated_at = NOW()
            WHERE id = $7
            RETURNING id, name, place_type, phone, latitude, longitude, images, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(place_type)
        .bind(phone)
        .bind(latitude)
        .bind(longitude)
        .bind(images)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for place {}: {}", id, e);
            AppError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Place not found for update: {}", id);
            AppError::NotFound(format!("Place with id '{}'", id))
        })?;

        log::info!("Updated place: {}", id);
        Ok(place)
    }

    /// Delete place
    /// DOCUMENTATION: Physical deletion; NotFound when no row matched
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
        let rows = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for place {}: {}", id, e);
                AppError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NotFound(format!("Place with id '{}'", id)));
        }

        log::info!("Deleted place: {}", id);
        Ok(())
    }
}
