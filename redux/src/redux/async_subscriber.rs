// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

/// Subscribers are notified with a snapshot of the state after each dispatch that
/// actually changed it. They run concurrently with each other.
#[async_trait]
pub trait AsyncSubscriber<S>
where
    S: Sync + Send,
{
    async fn run(&self, state: S);

    /// <https://doc.rust-lang.org/book/ch10-02-traits.html>
    #[allow(clippy::new_ret_no_self)]
    fn new() -> AsyncSubscriberItem<S>
    where
        Self: Default + Sized + Sync + Send + 'static,
    {
        Box::new(Self::default())
    }
}

pub type AsyncSubscriberItem<S> = Box<dyn AsyncSubscriber<S> + Send + Sync>;
pub type AsyncSubscriberVec<S> = Vec<AsyncSubscriberItem<S>>;
