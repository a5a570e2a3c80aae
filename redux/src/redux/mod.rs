// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod async_middleware;
pub mod async_subscriber;
pub mod dispatcher;
pub mod store;
pub mod sync_reducer;

// Re-export.
pub use async_middleware::*;
pub use async_subscriber::*;
pub use dispatcher::*;
pub use store::*;
pub use sync_reducer::*;
