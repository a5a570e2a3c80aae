// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          future::Future,
          sync::{Arc,
                 atomic::{AtomicUsize, Ordering}}};

use tokio::{sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
            task::JoinHandle};

/// Items that travel on the store's dispatch queue.
#[derive(Debug)]
pub enum QueueItem<A> {
    /// Dispatch this action when the queue is drained.
    Action(A),
    /// A task that was started with [`Dispatcher::spawn`] has finished, and all the
    /// actions it produced have already been enqueued ahead of this marker.
    Settled,
}

/// Handle to the store's dispatch queue. It is cheap to clone, and it is what middleware
/// use to schedule work that completes later.
///
/// The queue is FIFO. All the actions produced by a single spawned task are enqueued in
/// order, followed by a [`QueueItem::Settled`] marker. There is no ordering between the
/// actions of different tasks, since they finish whenever their futures finish.
pub struct Dispatcher<A> {
    sender: UnboundedSender<QueueItem<A>>,
    in_flight: Arc<AtomicUsize>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

impl<A> Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .finish()
    }
}

impl<A> Dispatcher<A>
where
    A: Send + 'static,
{
    /// Create a dispatcher and the receiving end of its queue. The [`crate::Store`] owns
    /// the receiver.
    #[must_use]
    pub fn new_queue() -> (Self, UnboundedReceiver<QueueItem<A>>) {
        let (sender, receiver) = unbounded_channel();
        let it = Self {
            sender,
            in_flight: Arc::new(AtomicUsize::new(0)),
        };
        (it, receiver)
    }

    /// Enqueue an action. It is dispatched the next time the queue is drained.
    pub fn dispatch(&self, action: A) {
        if self.sender.send(QueueItem::Action(action)).is_err() {
            tracing::warn!(message = "Dispatch queue is closed, dropping action");
        }
    }

    /// Run `future` in a Tokio task. The actions it resolves to are enqueued in order
    /// once it completes. The in flight count is incremented before this function
    /// returns, so a store that is draining its queue will wait for this task.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<()>
    where
        F: Future<Output = Vec<A>> + Send + 'static,
    {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let guard = SettledGuard {
            sender: self.sender.clone(),
        };
        tokio::spawn(async move {
            let actions = future.await;
            for action in actions {
                guard.send(QueueItem::Action(action));
            }
            // Dropping the guard enqueues the settled marker.
            drop(guard);
        })
    }

    /// Number of spawned tasks whose settled marker has not been drained yet.
    #[must_use]
    pub fn in_flight(&self) -> usize { self.in_flight.load(Ordering::SeqCst) }

    pub(crate) fn mark_settled(&self) {
        let _ = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |it| {
                it.checked_sub(1)
            });
    }
}

/// Enqueues [`QueueItem::Settled`] when dropped, even if the task panicked, so the store
/// never waits on a task that is gone.
struct SettledGuard<A> {
    sender: UnboundedSender<QueueItem<A>>,
}

impl<A> SettledGuard<A> {
    fn send(&self, item: QueueItem<A>) { let _ = self.sender.send(item); }
}

impl<A> Drop for SettledGuard<A> {
    fn drop(&mut self) { let _ = self.sender.send(QueueItem::Settled); }
}
