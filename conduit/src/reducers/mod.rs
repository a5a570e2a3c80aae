// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One reducer per slice of [`RootState`]. Each is a plain function:
//!
//! ```text
//! fn reduce(state: &Arc<SliceState>, action: &Action) -> Arc<SliceState>
//! ```
//!
//! 1. It never mutates its input, and never panics.
//! 2. An action that the slice doesn't care about hands back the same [`Arc`] (compare
//!    with [`Arc::ptr_eq`]).
//! 3. A "page unloaded" action resets the slice to its default, except for
//!    [`CommonState`] which counts it instead.
//!
//! [`RootReducer`] composes them, and is what gets registered with the store.
//!
//! [`Arc`]: std::sync::Arc
//! [`Arc::ptr_eq`]: std::sync::Arc::ptr_eq

// Attach sources.
pub mod article;
pub mod article_list;
pub mod auth;
pub mod common;
pub mod editor;
pub mod home;
pub mod profile;
pub mod root;
pub mod settings;

// Re-export.
pub use article::ArticleState;
pub use article_list::ArticleListState;
pub use auth::AuthState;
pub use common::{CommonState, DEFAULT_APP_NAME};
pub use editor::EditorState;
pub use home::HomeState;
pub use profile::ProfileState;
pub use root::*;
pub use settings::SettingsState;
