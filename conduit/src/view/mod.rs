// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure helpers that UI components derive what they show from. Nothing here renders
//! anything, it only decides what to render.

// Attach sources.
pub mod article_preview;
pub mod header;
pub mod list_errors;
pub mod list_pagination;

// Re-export.
pub use article_preview::*;
pub use header::*;
pub use list_errors::*;
pub use list_pagination::*;
