//! API handlers for BibSync REST endpoints

pub mod health;
pub mod openapi;
pub mod papers;
