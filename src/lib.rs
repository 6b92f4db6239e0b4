//! Pokecache - an interactive Pokedex client with a time-expiring response cache
//!
//! Raw PokeAPI response bodies are cached by request URL and purged by a
//! background reaper once they outlive the retention window.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::{CacheConfig, ExpiringCache};
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{CacheError, ClientError, ReplError};
