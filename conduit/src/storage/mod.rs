// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Durable storage for the credential token. The persistence middleware is its only
//! writer, and [`crate::ActionCreators::app_load`] is its only reader.

// Attach sources.
pub mod in_memory_token_store;
pub mod kv_token_store;
pub mod token_store;

// Re-export.
pub use in_memory_token_store::*;
pub use kv_token_store::*;
pub use token_store::*;
