// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod auth_service;
pub mod cloudinary_client;
pub mod place_service;
pub mod user_service;

pub use auth_service::*;
pub use cloudinary_client::*;
pub use place_service::*;
pub use user_service::*;
