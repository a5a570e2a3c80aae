// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Records that travel between the remote API and the reducers. Field names are
//! `camelCase` on the wire, matching the RealWorld API.

// Attach sources.
pub mod article;
pub mod envelopes;
pub mod error_body;
pub mod pager;
pub mod user;

// Re-export.
pub use article::*;
pub use envelopes::*;
pub use error_body::*;
pub use pager::*;
pub use user::*;
