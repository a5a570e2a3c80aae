// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

use crate::Dispatcher;

/// What a middleware decided to do with an action in [`AsyncMiddleware::before`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiddlewareResult<A> {
    /// Hand the action (possibly modified) to the next middleware, and then the reducers.
    Continue(A),
    /// Hand these actions, in order, to the next middleware instead of the original.
    Replace(Vec<A>),
    /// Nothing reaches the reducers.
    Drop,
}

/// Middleware have two hooks, both of which have a default no-op implementation.
///
/// 1. [`AsyncMiddleware::before`] runs before any reducer sees the action. This is where
///    an action can be forwarded, replaced, or dropped. Work that completes later must
///    not be awaited here. Hand it to [`Dispatcher::spawn`] instead, which enqueues the
///    actions it produces onto the store's dispatch queue.
/// 2. [`AsyncMiddleware::after`] runs once the reducers have seen the action, with the
///    resulting state. This is where side effects go. It can't change the action.
///
/// Your code in these hooks must not try to acquire a lock on a [`crate::SharedStore`]
/// that is currently dispatching. The store's [`tokio::sync::RwLock`] is not reentrant,
/// and this will deadlock. Use the [Dispatcher] instead.
#[async_trait]
pub trait AsyncMiddleware<S, A>: Send + Sync
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    async fn before(
        &self,
        action: A,
        _state: S,
        _dispatcher: Dispatcher<A>,
    ) -> MiddlewareResult<A> {
        MiddlewareResult::Continue(action)
    }

    async fn after(&self, _action: &A, _state: &S) {}

    /// <https://doc.rust-lang.org/book/ch10-02-traits.html>
    #[allow(clippy::new_ret_no_self)]
    fn new() -> AsyncMiddlewareItem<S, A>
    where
        Self: Default + Sized + 'static,
    {
        Box::new(Self::default())
    }
}

pub type AsyncMiddlewareItem<S, A> = Box<dyn AsyncMiddleware<S, A> + Send + Sync>;
pub type AsyncMiddlewareVec<S, A> = Vec<AsyncMiddlewareItem<S, A>>;
