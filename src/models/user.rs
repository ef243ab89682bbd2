// src/models/user.rs
// DOCUMENTATION: Core data structures for users
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a complete user record from the database
/// DOCUMENTATION: This struct maps directly to the users table in PostgreSQL
/// Used for internal operations and database queries
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address - unique index at the database layer
    pub email: String,

    /// Password as received - never serialized into API responses
    pub password: String,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new user
/// DOCUMENTATION: Data transfer object for POST /users endpoint
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateUserRequest {
    /// User name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Email address (required, must be valid)
    #[validate(email)]
    pub email: String,

    /// Password (required)
    #[validate(length(min = 1, max = 255))]
    pub password: String,
}

/// Request DTO for updating an existing user
/// DOCUMENTATION: Data transfer object for PUT /users/{id} endpoint
/// All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Updated name
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// Updated email
    #[validate(email)]
    pub email: Option<String>,

    /// Updated password
    #[validate(length(min = 1, max = 255))]
    pub password: Option<String>,
}

/// Response DTO for API responses
/// DOCUMENTATION: Data transfer object for user endpoints
/// Deliberately excludes the password field
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Convert User to UserResponse for API
    /// DOCUMENTATION: Maps database model to API response DTO
    /// Excludes the password field
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{"name": "Jonas", "email": "jonas@example.com", "password": "123"}"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.name, "Jonas");
        assert_eq!(req.email, "jonas@example.com");
        assert_eq!(req.password, "123");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_invalid_email() {
        let req = CreateUserRequest {
            name: "Jonas".to_string(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_never_contains_password() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Jonas".to_string(),
            email: "jonas@example.com".to_string(),
            password: "123".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(user.to_response()).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["name"], "Jonas");
        assert_eq!(value["email"], "jonas@example.com");
    }
}
