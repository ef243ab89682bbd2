// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod auth;
pub mod health;
pub mod places;
pub mod users;

pub use auth::config as auth_config;
pub use health::config as health_config;
pub use places::config as places_config;
pub use users::config as users_config;
