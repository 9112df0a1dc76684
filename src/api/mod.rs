//! Modal Oracle WASM API
//!
//! This module provides the JavaScript-facing API for the mode inference
//! engine.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization, error conversion
//! - `types`: result shapes consumed by the renderer
//! - `core`: the exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
