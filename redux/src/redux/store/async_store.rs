// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use core::fmt::Debug;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc::UnboundedReceiver};

use crate::{AsyncMiddleware, AsyncMiddlewareVec, AsyncSubscriber, AsyncSubscriberVec,
            Dispatcher, MiddlewareResult, QueueItem, Reducer, ReducerVec};

pub type SharedStore<S, A> = Arc<RwLock<Store<S, A>>>;

/// Dispatch an action on a [`SharedStore`] from a new Tokio task, without waiting for it.
#[macro_export]
macro_rules! spawn_dispatch_action {
    ($store: expr, $action: expr) => {{
        let store_copy = $store.clone();
        tokio::spawn(async move {
            store_copy.write().await.dispatch_action($action).await;
        });
    }};
}

/// Thread safe and async Redux store (using [`tokio`]).
pub struct Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send + 'static,
    A: Clone + Debug + Send + Sync + 'static,
{
    pub state: S,
    pub history: Vec<S>,
    pub middleware_vec: AsyncMiddlewareVec<S, A>,
    pub subscriber_vec: AsyncSubscriberVec<S>,
    pub reducer_vec: ReducerVec<S, A>,
    pub maybe_previous_state: Option<S>,
    dispatcher: Dispatcher<A>,
    receiver: UnboundedReceiver<QueueItem<A>>,
}

impl<S, A> Default for Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send + 'static,
    A: Clone + Debug + Send + Sync + 'static,
{
    fn default() -> Store<S, A> { Self::with_state(S::default()) }
}

impl<S, A> Debug for Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send + 'static,
    A: Clone + Debug + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("middleware_count", &self.middleware_vec.len())
            .field("subscriber_count", &self.subscriber_vec.len())
            .field("reducer_count", &self.reducer_vec.len())
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

// FUTURE: make history implementation more comprehensive (eg: max history size).

// Handle subscriber, middleware, reducer management.
impl<S, A> Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send + 'static,
    A: Clone + Debug + Send + Sync + 'static,
{
    /// Create a store that starts with the given state instead of `S::default()`.
    #[must_use]
    pub fn with_state(state: S) -> Store<S, A> {
        let (dispatcher, receiver) = Dispatcher::new_queue();
        Store {
            state,
            history: Vec::default(),
            middleware_vec: Vec::default(),
            subscriber_vec: Vec::default(),
            reducer_vec: Vec::default(),
            maybe_previous_state: None,
            dispatcher,
            receiver,
        }
    }

    pub fn add_subscriber(
        &mut self,
        subscriber_fn: Box<dyn AsyncSubscriber<S> + Send + Sync>,
    ) -> &mut Store<S, A> {
        self.subscriber_vec.push(subscriber_fn);
        self
    }

    pub fn clear_subscribers(&mut self) -> &mut Store<S, A> {
        self.subscriber_vec.clear();
        self
    }

    pub fn add_middleware(
        &mut self,
        middleware_fn: Box<dyn AsyncMiddleware<S, A> + Send + Sync>,
    ) -> &mut Store<S, A> {
        self.middleware_vec.push(middleware_fn);
        self
    }

    pub fn clear_middlewares(&mut self) -> &mut Store<S, A> {
        self.middleware_vec.clear();
        self
    }

    pub fn add_reducer(
        &mut self,
        reducer_fn: Box<dyn Reducer<S, A> + Send + Sync>,
    ) -> &mut Store<S, A> {
        self.reducer_vec.push(reducer_fn);
        self
    }

    pub fn clear_reducers(&mut self) -> &mut Store<S, A> {
        self.reducer_vec.clear();
        self
    }

    /// A handle to this store's dispatch queue. Actions sent to it are dispatched the
    /// next time [`Store::run_until_idle`] is called.
    #[must_use]
    pub fn get_dispatcher(&self) -> Dispatcher<A> { self.dispatcher.clone() }
}

// Handle dispatch & history.
impl<S, A> Store<S, A>
where
    S: Clone + Default + PartialEq + Debug + Sync + Send + 'static,
    A: Clone + Debug + Send + Sync + 'static,
{
    #[must_use]
    pub fn get_state(&self) -> S { self.state.clone() }

    #[must_use]
    pub fn get_history(&self) -> Vec<S> { self.history.clone() }

    /// Number of deferred tasks (started by middleware) that haven't settled yet.
    #[must_use]
    pub fn in_flight(&self) -> usize { self.dispatcher.in_flight() }

    #[tracing::instrument(skip_all)]
    pub async fn dispatch_action(&mut self, action: A) {
        // % is Display, ? is Debug.
        tracing::debug!(message = "📣 Dispatch action", action = ?action);

        // Run middlewares.
        let actions = self.run_middleware_before(action).await;

        // Dispatch what's left.
        for action in &actions {
            self.actually_dispatch_action(action).await;
        }
    }

    /// Keep dispatching actions from the dispatch queue until no deferred task is in
    /// flight, and the queue is empty. Actions dispatched from here may start more
    /// deferred tasks, which are waited on as well.
    #[tracing::instrument(skip_all)]
    pub async fn run_until_idle(&mut self) {
        loop {
            // Drain everything that is already queued.
            while let Ok(item) = self.receiver.try_recv() {
                self.handle_queue_item(item).await;
            }

            if self.in_flight() == 0 {
                break;
            }

            // Wait for the next item from a task that hasn't settled yet.
            match self.receiver.recv().await {
                Some(item) => self.handle_queue_item(item).await,
                None => break,
            }
        }
    }

    async fn handle_queue_item(&mut self, item: QueueItem<A>) {
        match item {
            QueueItem::Action(action) => self.dispatch_action(action).await,
            QueueItem::Settled => self.dispatcher.mark_settled(),
        }
    }

    async fn actually_dispatch_action(&mut self, action: &A) {
        self.run_reducers(action);
        self.run_middleware_after(action).await;
        self.run_subscribers().await;
    }

    fn has_state_changed(&self) -> bool {
        if let Some(previous_state) = &self.maybe_previous_state {
            *previous_state != self.state
        } else {
            true
        }
    }

    fn save_state_to_previous_state(&mut self) {
        self.maybe_previous_state = Some(self.state.clone());
    }

    /// Run these concurrently.
    async fn run_subscribers(&mut self) {
        // Early return if state hasn't changed.
        if !self.has_state_changed() {
            return;
        }

        // Update previous state, for next time.
        self.save_state_to_previous_state();

        // Actually run the subscribers.
        let mut vec_fut = vec![];
        let state_clone = self.get_state();
        for fun in &self.subscriber_vec {
            vec_fut.push(fun.run(state_clone.clone()));
        }
        futures::future::join_all(vec_fut).await;
    }

    /// Run these in sequence.
    fn run_reducers(&mut self, action: &A) {
        if self.reducer_vec.is_empty() {
            return;
        }
        for reducer in &self.reducer_vec {
            let new_state = reducer.run(action, &self.state);
            self.state = new_state;
        }
        self.update_history();
    }

    // Update history.
    fn update_history(&mut self) {
        let update_history = match self.history.last() {
            None => true,
            Some(last_known_state) => *last_known_state != self.state,
        };
        if update_history {
            self.history.push(self.get_state());
        }
    }

    /// Run these in sequence, as a chain. Each middleware sees the actions that the
    /// previous one produced.
    async fn run_middleware_before(&mut self, action: A) -> Vec<A> {
        let mut actions = vec![action];

        for middleware in &self.middleware_vec {
            let mut next_actions = vec![];
            for action in actions {
                let result = middleware
                    .before(action, self.state.clone(), self.dispatcher.clone())
                    .await;
                match result {
                    MiddlewareResult::Continue(action) => next_actions.push(action),
                    MiddlewareResult::Replace(vec_action) => {
                        next_actions.extend(vec_action);
                    }
                    MiddlewareResult::Drop => {}
                }
            }
            actions = next_actions;
        }

        actions
    }

    /// Run these in sequence, after the reducers.
    async fn run_middleware_after(&mut self, action: &A) {
        for middleware in &self.middleware_vec {
            middleware.after(action, &self.state).await;
        }
    }
}
