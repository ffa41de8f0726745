//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Request/response models
//! - Per-session cart storage and expiry
//! - Session cookie helpers
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{spawn_session_sweeper, AppState, SharedState};
pub use store::CartStore;
