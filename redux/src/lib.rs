// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thread safe and asynchronous Redux store, built using [Tokio](https://tokio.rs).
//!
//! 1. Reducers are plain synchronous functions, run in sequence, in the order they were
//!    added to the [Store].
//! 2. Middleware run in a chain, before the reducers see an action (where they can
//!    forward, replace, or drop it), and again after the reducers have seen it (where
//!    they can perform side effects).
//! 3. Subscribers are run concurrently, and only when the state has actually changed.
//! 4. Middleware that need to do work later (eg: wait for a network request to settle)
//!    hand that work to the [Dispatcher]. The [Dispatcher] runs it in a Tokio task and
//!    enqueues the resulting actions onto the store's single dispatch queue. Call
//!    [`Store::run_until_idle`] to drain that queue.
//!
//! The store never re-enters itself. An action produced by deferred work is only
//! dispatched when the queue is drained, which is always after the dispatch that
//! scheduled the work has completed.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod redux;

// Re-export.
pub use redux::*;
