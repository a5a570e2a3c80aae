// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two middleware that [`crate::new_conduit_store`] registers, in this order:
//!
//! 1. [`PromiseMiddleware`] makes sure reducers only ever see settled payloads.
//! 2. [`TokenPersistenceMiddleware`] mirrors the credential token into durable storage.

// Attach sources.
pub mod promise_middleware;
pub mod token_persistence_middleware;

// Re-export.
pub use promise_middleware::*;
pub use token_persistence_middleware::*;
