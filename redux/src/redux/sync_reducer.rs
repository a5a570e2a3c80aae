// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

/// Reducers are pure and synchronous. Given the current state and an action they return
/// the next state. They must not mutate `state`.
pub trait Reducer<S, A>: Send + Sync
where
    S: Sync + Send,
    A: Sync + Send,
{
    fn run(&self, action: &A, state: &S) -> S;

    /// <https://doc.rust-lang.org/book/ch10-02-traits.html>
    #[allow(clippy::new_ret_no_self)]
    fn new() -> ReducerItem<S, A>
    where
        Self: Default + Sized + 'static,
    {
        Box::new(Self::default())
    }
}

pub type ReducerItem<S, A> = Box<dyn Reducer<S, A> + Send + Sync>;
pub type ReducerVec<S, A> = Vec<ReducerItem<S, A>>;

/// Reducer function.
pub type ReducerFn<S, A> = dyn Fn(&A, &S) -> S + Sync + Send + 'static;

/// Lets a closure be used where a [Reducer] is expected.
pub struct ReducerFnWrapper<S, A> {
    fn_ref: Box<ReducerFn<S, A>>,
}

impl<S, A> ReducerFnWrapper<S, A>
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    #[must_use]
    pub fn from(fn_ref: impl Fn(&A, &S) -> S + Send + Sync + 'static) -> ReducerItem<S, A> {
        Box::new(Self {
            fn_ref: Box::new(fn_ref),
        })
    }
}

impl<S, A> Reducer<S, A> for ReducerFnWrapper<S, A>
where
    S: Sync + Send,
    A: Sync + Send,
{
    fn run(&self, action: &A, state: &S) -> S { (self.fn_ref)(action, state) }
}

impl<S, A> Debug for ReducerFnWrapper<S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ReducerFnWrapper")
    }
}
