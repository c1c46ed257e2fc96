//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - JSON document files (`profiles.json`, `schemes.json`)
//! - `memory/` - In-process storage

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::InMemoryStore;
