// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::AppError;
use crate::models::{CreatePlaceRequest, PaginationQuery, UpdatePlaceRequest};
use crate::services::{CloudinaryClient, PlaceService};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// POST /places
/// Create a new place, optionally uploading an inline image
pub async fn create_place(
    pool: web::Data<PgPool>,
    cloudinary: web::Data<CloudinaryClient>,
    req: web::Json<CreatePlaceRequest>,
) -> Result<impl Responder, AppError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    let place =
        PlaceService::create(pool.get_ref(), cloudinary.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(place))
}

/// GET /places
/// List all places
pub async fn list_places(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let places = PlaceService::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(places))
}

/// GET /places/paginated
/// List places one page at a time
pub async fn list_places_paginated(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationQuery>,
) -> Result<impl Responder, AppError> {
    let result = PlaceService::find_paginated(pool.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /places/{id}
/// Retrieve a place by ID
pub async fn get_place(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let place = PlaceService::find_one(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// PUT /places/{id}
/// Update a place, optionally uploading an additional inline image
pub async fn update_place(
    pool: web::Data<PgPool>,
    cloudinary: web::Data<CloudinaryClient>,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePlaceRequest>,
) -> Result<impl Responder, AppError> {
    if let Err(e) = req.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    let place = PlaceService::update(
        pool.get_ref(),
        cloudinary.get_ref(),
        path.into_inner(),
        req.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(place))
}

/// DELETE /places/{id}
/// Delete a place and its Cloudinary images (best-effort)
pub async fn delete_place(
    pool: web::Data<PgPool>,
    cloudinary: web::Data<CloudinaryClient>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    PlaceService::remove(pool.get_ref(), cloudinary.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .route("", web::post().to(create_place))
            .route("", web::get().to(list_places))
            .route("/paginated", web::get().to(list_places_paginated))
            .route("/{id}", web::get().to(get_place))
            .route("/{id}", web::put().to(update_place))
            .route("/{id}", web::delete().to(delete_place)),
    );
}
