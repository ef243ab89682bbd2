// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Place category
/// DOCUMENTATION: Enumerated place types, serialized in SCREAMING_SNAKE_CASE
/// Stored as text in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceType {
    Restaurant,
    Bar,
    Cafe,
    Club,
    Park,
    Museum,
    Other,
}

impl PlaceType {
    /// String form used for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Restaurant => "RESTAURANT",
            PlaceType::Bar => "BAR",
            PlaceType::Cafe => "CAFE",
            PlaceType::Club => "CLUB",
            PlaceType::Park => "PARK",
            PlaceType::Museum => "MUSEUM",
            PlaceType::Other => "OTHER",
        }
    }

    /// Parse the stored string form back into the enum
    /// Unknown values map to Other so old rows never break responses
    pub fn from_db(value: &str) -> PlaceType {
        match value {
            "RESTAURANT" => PlaceType::Restaurant,
            "BAR" => PlaceType::Bar,
            "CAFE" => PlaceType::Cafe,
            "CLUB" => PlaceType::Club,
            "PARK" => PlaceType::Park,
            "MUSEUM" => PlaceType::Museum,
            _ => PlaceType::Other,
        }
    }
}

/// Represents a complete place record from the database
/// DOCUMENTATION: This struct maps directly to the places table in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct Place {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Place name - required field for all places
    pub name: String,

    /// Place category stored as text (RESTAURANT, BAR, ...)
    pub place_type: String,

    /// Phone number
    pub phone: Option<String>,

    /// Geographic coordinates - no bounds checking at the application layer
    pub latitude: f64,
    pub longitude: f64,

    /// Cloudinary secure URLs for uploaded images
    pub images: Vec<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new place
/// DOCUMENTATION: Data transfer object for POST /places endpoint
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreatePlaceRequest {
    /// Place name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Place category (required)
    #[serde(rename = "type")]
    pub place_type: PlaceType,

    /// Phone number
    pub phone: Option<String>,

    /// Geographic coordinates
    pub latitude: f64,
    pub longitude: f64,

    /// Optional inline image as a base64 data URI
    /// Uploaded to Cloudinary before the database insert
    #[serde(default)]
    pub image: Option<String>,
}

/// Request DTO for updating an existing place
/// DOCUMENTATION: Data transfer object for PUT /places/{id} endpoint
/// All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    /// Updated name
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// Updated category
    #[serde(rename = "type")]
    pub place_type: Option<PlaceType>,

    /// Updated phone number
    pub phone: Option<String>,

    /// Updated coordinates
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Optional inline image as a base64 data URI
    /// Uploaded to Cloudinary and appended to the image list
    #[serde(default)]
    pub image: Option<String>,
}

/// Response DTO for API responses
/// DOCUMENTATION: Data transfer object for place endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: Uuid,
    pub name: String,

    /// Place category (RESTAURANT, BAR, CAFE, ...)
    #[serde(rename = "type")]
    pub place_type: PlaceType,

    pub phone: Option<String>,

    /// Geographic coordinates
    pub latitude: f64,
    pub longitude: f64,

    /// Media
    pub images: Vec<String>,

    /// Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pagination query parameters
/// DOCUMENTATION: DTO for parsing query string in /places/paginated endpoint
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based)
    pub page: Option<i64>,

    /// Results per page (max 100)
    pub limit: Option<i64>,
}

/// Paginated listing response
/// DOCUMENTATION: DTO for returning place pages with pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginatedPlacesResponse {
    /// Array of place results
    pub data: Vec<PlaceResponse>,

    /// Total number of rows (regardless of pagination)
    pub total_count: i64,

    /// Current page number
    pub page: i64,

    /// Results per page
    pub limit: i64,

    /// Whether more results exist on next page
    pub has_more: bool,
}

impl Place {
    /// Convert Place to PlaceResponse for API
    /// DOCUMENTATION: Maps database model to API response DTO
    pub fn to_response(&self) -> PlaceResponse {
        PlaceResponse {
            id: self.id,
            name: self.name.clone(),
            place_type: PlaceType::from_db(&self.place_type),
            phone: self.phone.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            images: self.images.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_type_round_trip() {
        for t in [
            PlaceType::Restaurant,
            PlaceType::Bar,
            PlaceType::Cafe,
            PlaceType::Club,
            PlaceType::Park,
            PlaceType::Museum,
            PlaceType::Other,
        ] {
            assert_eq!(PlaceType::from_db(t.as_str()), t);
        }
    }

    #[test]
    fn test_place_type_unknown_maps_to_other() {
        assert_eq!(PlaceType::from_db("DISCO"), PlaceType::Other);
        assert_eq!(PlaceType::from_db(""), PlaceType::Other);
    }

    #[test]
    fn test_place_type_serde_format() {
        let json = serde_json::to_string(&PlaceType::Bar).unwrap();
        assert_eq!(json, "\"BAR\"");

        let parsed: PlaceType = serde_json::from_str("\"RESTAURANT\"").unwrap();
        assert_eq!(parsed, PlaceType::Restaurant);
    }

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "name": "Bar do Ze",
            "type": "BAR",
            "phone": "+55 11 99999-0000",
            "latitude": -23.5505,
            "longitude": -46.6333
        }"#;

        let req: CreatePlaceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Bar do Ze");
        assert_eq!(req.place_type, PlaceType::Bar);
        assert_eq!(req.latitude, -23.5505);
        assert!(req.image.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req = CreatePlaceRequest {
            name: String::new(),
            place_type: PlaceType::Bar,
            phone: None,
            latitude: 0.0,
            longitude: 0.0,
            image: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_to_response_preserves_fields() {
        let place = Place {
            id: Uuid::new_v4(),
            name: "Bar do Ze".to_string(),
            place_type: "BAR".to_string(),
            phone: Some("+55 11 99999-0000".to_string()),
            latitude: -23.5505,
            longitude: -46.6333,
            images: vec!["https://res.cloudinary.com/demo/image/upload/v1/places/a.jpg".into()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let resp = place.to_response();
        assert_eq!(resp.place_type, PlaceType::Bar);
        assert_eq!(resp.images.len(), 1);
        assert_eq!(resp.name, place.name);
    }
}
