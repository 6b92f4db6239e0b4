//! Response models for the PokeAPI
//!
//! This module defines the DTOs (Data Transfer Objects) decoded from cached
//! or freshly fetched response bodies.

pub mod location_area;

// Re-export commonly used types
pub use location_area::{LocationAreaPage, NamedResource};
