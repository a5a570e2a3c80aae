// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
#[allow(clippy::module_inception)]
pub mod action;
pub mod action_type;
pub mod fields;
pub mod payload;

// Re-export.
pub use action::*;
pub use action_type::*;
pub use fields::*;
pub use payload::*;
