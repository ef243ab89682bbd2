// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and repository, coordinates Cloudinary

use crate::db::PlaceRepository;
use crate::errors::AppError;
use crate::models::{
    CreatePlaceRequest, PaginatedPlacesResponse, PaginationQuery, PlaceResponse,
    UpdatePlaceRequest,
};
use crate::services::CloudinaryClient;
use sqlx::PgPool;
use uuid::Uuid;

/// Default page size for paginated listings
const DEFAULT_PAGE_LIMIT: i64 = 20;
/// Upper bound for page size
const MAX_PAGE_LIMIT: i64 = 100;

pub struct PlaceService;

impl PlaceService {
    /// Create a new place
    /// DOCUMENTATION: An inline image is uploaded to Cloudinary first and its
    /// secure URL stored with the place. A failed database insert after a
    /// successful upload leaves the asset orphaned (no compensation).
    pub async fn create(
        pool: &PgPool,
        cloudinary: &CloudinaryClient,
        req: CreatePlaceRequest,
    ) -> Result<PlaceResponse, AppError> {
        let mut images = Vec::new();
        if let Some(data_uri) = &req.image {
            let upload = cloudinary.upload_image(data_uri).await?;
            images.push(upload.secure_url);
        }

        let place = PlaceRepository::create(
            pool,
            &req.name,
            req.place_type.as_str(),
            req.phone.as_deref(),
            req.latitude,
            req.longitude,
            &images,
        )
        .await?;

        Ok(place.to_response())
    }

    /// List all places, preserving repository order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<PlaceResponse>, AppError> {
        let places = PlaceRepository::find_all(pool).await?;
        Ok(places.iter().map(|p| p.to_response()).collect())
    }

    /// Get a place by ID
    pub async fn find_one(pool: &PgPool, id: Uuid) -> Result<PlaceResponse, AppError> {
        let place = PlaceRepository::find_by_id(pool, id).await?;
        Ok(place.to_response())
    }

    /// List one page of places
    pub async fn find_paginated(
        pool: &PgPool,
        query: PaginationQuery,
    ) -> Result<PaginatedPlacesResponse, AppError> {
        let (page, limit) = clamp_pagination(query.page, query.limit);
        let (places, total_count) = PlaceRepository::find_paginated(pool, page, limit).await?;

        Ok(PaginatedPlacesResponse {
            data: places.iter().map(|p| p.to_response()).collect(),
            total_count,
            page,
            limit,
            has_more: has_more(total_count, page, limit),
        })
    }

    /// Update a place
    /// DOCUMENTATION: An inline image is uploaded and appended to the list,
    /// other fields are partially updated
    pub async fn update(
        pool: &PgPool,
        cloudinary: &CloudinaryClient,
        id: Uuid,
        req: UpdatePlaceRequest,
    ) -> Result<PlaceResponse, AppError> {
        let existing = PlaceRepository::find_by_id(pool, id).await?;

        let mut images = existing.images;
        if let Some(data_uri) = &req.image {
            let upload = cloudinary.upload_image(data_uri).await?;
            images.push(upload.secure_url);
        }

        let place = PlaceRepository::update(
            pool,
            id,
            req.name.as_deref(),
            req.place_type.map(|t| t.as_str()),
            req.phone.as_deref(),
            req.latitude,
            req.longitude,
            &images,
        )
        .await?;

        Ok(place.to_response())
    }

    /// Delete a place
    /// DOCUMENTATION: Cloudinary assets are removed best-effort before the
    /// row is deleted; upstream failures are logged but never block deletion
    pub async fn remove(
        pool: &PgPool,
        cloudinary: &CloudinaryClient,
        id: Uuid,
    ) -> Result<(), AppError> {
        let place = PlaceRepository::find_by_id(pool, id).await?;

        for url in &place.images {
            match CloudinaryClient::public_id_from_url(url) {
                Some(public_id) => {
                    if let Err(e) = cloudinary.delete_image(&public_id).await {
                        log::warn!("Failed to delete Cloudinary image {}: {}", public_id, e);
                    }
                }
                None => {
                    log::warn!("Skipping non-Cloudinary image URL on place {}: {}", id, url);
                }
            }
        }

        PlaceRepository::delete(pool, id).await
    }
}

/// Clamp raw pagination parameters to their valid ranges
/// Page is 1-based and capped so that page * limit never overflows i64;
/// limit defaults to 20 and is capped at 100
fn clamp_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).clamp(1, i64::MAX / MAX_PAGE_LIMIT);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    (page, limit)
}

/// Whether another page exists after the current one
fn has_more(total_count: i64, page: i64, limit: i64) -> bool {
    total_count > page.saturating_mul(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pagination_defaults() {
        assert_eq!(clamp_pagination(None, None), (1, 20));
    }

    #[test]
    fn test_clamp_pagination_bounds() {
        assert_eq!(clamp_pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(clamp_pagination(Some(-5), Some(500)), (1, 100));
        assert_eq!(clamp_pagination(Some(3), Some(50)), (3, 50));
    }

    #[test]
    fn test_clamp_pagination_huge_page_does_not_overflow() {
        let (page, limit) = clamp_pagination(Some(i64::MAX), Some(100));
        assert_eq!(limit, 100);
        assert_eq!(page, i64::MAX / 100);

        // The offset and has_more math must stay within i64 for any clamped input
        let offset = (page - 1) * limit;
        assert!(offset > 0);
        assert!(!has_more(1_000, page, limit));
    }

    #[test]
    fn test_has_more_saturates_at_i64_max() {
        // Unclamped callers must not be able to provoke a multiply overflow
        assert!(!has_more(i64::MAX, i64::MAX, 100));
    }

    #[test]
    fn test_has_more() {
        assert!(has_more(45, 1, 20));
        assert!(has_more(45, 2, 20));
        assert!(!has_more(45, 3, 20));
        assert!(!has_more(40, 2, 20));
        assert!(!has_more(0, 1, 20));
    }
}
