// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod place_repository;
pub mod user_repository;

pub use place_repository::*;
pub use user_repository::*;
