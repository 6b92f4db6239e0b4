//! Background Tasks Module
//!
//! Contains background tasks that run alongside the cache.
//!
//! # Tasks
//! - Reaper: removes entries older than the retention window at a fixed interval

mod reaper;

pub use reaper::spawn_reaper_task;
