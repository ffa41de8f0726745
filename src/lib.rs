//! Armory Cart Library
//!
//! A small web service exposing a fixed weapon catalog and a per-session
//! shopping cart over a JSON API.

// Domain modules
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
