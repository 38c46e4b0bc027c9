//! Configuration types for Quill.
//!
//! This crate provides the configuration types used by Quill
//! for `.quill/config.yaml` files.

pub mod types;
pub mod loader;
pub mod env;

pub use types::*;
pub use loader::*;
pub use env::*;
