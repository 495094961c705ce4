//! Background Tasks Module
//!
//! Periodic maintenance tasks for the in-memory caches.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
