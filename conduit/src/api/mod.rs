// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The boundary with the remote RealWorld API. The wire protocol lives behind
//! [`ConduitApi`], this crate only sees typed envelopes or a [`ClientError`].

// Attach sources.
pub mod action_creators;
pub mod client_error;
pub mod conduit_api;

// Re-export.
pub use action_creators::*;
pub use client_error::*;
pub use conduit_api::*;
