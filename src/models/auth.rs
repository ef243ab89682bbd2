// src/models/auth.rs
// DOCUMENTATION: Auth request DTOs
// PURPOSE: Payload shapes for the (stub) auth endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request DTO for POST /auth/register
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub password: String,
}

/// Request DTO for POST /auth/login
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub password: String,
}
