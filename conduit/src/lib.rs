// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! State core for a RealWorld ("Conduit") blogging client.
//!
//! This crate owns everything between "the UI asked for something" and "the UI got a new
//! state snapshot":
//!
//! - [`action`]: the closed set of [`Action`]s, and the [`Payload`] type that async
//!   results travel in.
//! - [`reducers`]: one reducer per slice of [`RootState`], composed by [`RootReducer`].
//! - [`middleware`]: [`PromiseMiddleware`] turns pending payloads into start / end
//!   notifications plus the settled action, and [`TokenPersistenceMiddleware`] mirrors
//!   the credential token into a [`TokenStore`].
//! - [`api`]: the [`ConduitApi`] boundary (the remote API is opaque here) and
//!   [`ActionCreators`] that build actions from UI intents.
//! - [`view`]: small pure helpers that UI components derive their output from.
//! - [`storage`]: where the credential token is kept between runs.
//! - [`replay`]: dispatch a JSON script of actions, which is what the `conduit` binary
//!   does.
//!
//! The store itself is the generic one from [`conduit_redux`]. Use [`new_conduit_store`]
//! to get one that is fully wired up.
//!
//! ```no_run
//! # async fn run() -> miette::Result<()> {
//! use std::sync::Arc;
//! use conduit::{Action, ConduitConfig, InMemoryTokenStore, new_conduit_store};
//!
//! let config = ConduitConfig::default();
//! let mut store = new_conduit_store(&config, Arc::new(InMemoryTokenStore::default()), None);
//! store.dispatch_action(Action::Logout).await;
//! store.run_until_idle().await;
//! # Ok(())
//! # }
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod action;
pub mod api;
pub mod clap_config;
pub mod config;
pub mod error;
pub mod log;
pub mod middleware;
pub mod model;
pub mod reducers;
pub mod replay;
pub mod storage;
pub mod store;
pub mod test_fixtures;
pub mod view;

// Re-export.
pub use action::*;
pub use api::*;
pub use clap_config::*;
pub use config::*;
pub use error::*;
pub use middleware::*;
pub use model::*;
pub use reducers::{ArticleListState, ArticleState, AuthState, CommonState, DEFAULT_APP_NAME,
                   EditorState, HomeState, ProfileState, RootReducer, RootState,
                   SettingsState};
pub use storage::*;
pub use store::*;
