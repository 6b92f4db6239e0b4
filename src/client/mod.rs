//! Client Module
//!
//! HTTP access to the PokeAPI, reading through the expiring cache.

mod pokeapi;

pub use pokeapi::{PokeApiClient, PAGE_SIZE};
