// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicU64, Ordering}};

use async_trait::async_trait;
use conduit_redux::{AsyncMiddleware, Dispatcher, MiddlewareResult};
use serde::{Deserialize, Serialize};

use crate::{Action, Deferred, RootState};

/// What to do with a result that settles after the user has navigated away from the
/// page that asked for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
         strum_macros::Display, strum_macros::EnumString, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StaleResultPolicy {
    /// Apply it anyway, to whatever the slice now holds.
    #[default]
    Apply,
    /// Drop it. Its [`Action::AsyncEnd`] is still emitted, so nothing is left in
    /// progress.
    #[value(name = "drop")]
    #[strum(serialize = "drop")]
    #[serde(rename = "drop")]
    DropAfterNavigation,
}

/// Waits on pending payloads, so that reducers never see one.
///
/// An action without a pending payload is forwarded as is. For one with a pending
/// payload:
///
/// 1. [`Action::AsyncStart`] replaces it right away, unless it is untracked (see
///    [`Action::skip_tracking`]). Untracked actions are dropped here instead.
/// 2. The payload is awaited on a task, via [`Dispatcher::spawn`]. Once it settles,
///    [`Action::AsyncEnd`] (if tracked) and then the action with its payload
///    [`crate::Payload::Ready`] or [`crate::Payload::Failed`] are enqueued.
///
/// So for each pending action the start is always seen before the end, which is always
/// seen before the result, and the result is seen exactly once. Results of different
/// actions arrive in whatever order they settle.
///
/// With [`StaleResultPolicy::DropAfterNavigation`], a tracked result is dropped if a
/// page was unloaded (`common.view_change_counter` moved) between dispatch and
/// settlement. A page unloaded after settlement, but before the queue is drained, is
/// not noticed.
#[derive(Debug, Default)]
pub struct PromiseMiddleware {
    pub policy: StaleResultPolicy,
    /// Last seen `common.view_change_counter`, shared with in flight tasks.
    view_change_counter: Arc<AtomicU64>,
}

impl PromiseMiddleware {
    #[must_use]
    pub fn new_with_policy(policy: StaleResultPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    fn spawn_settlement(
        &self,
        deferred: Deferred,
        dispatched_at: u64,
        dispatcher: &Dispatcher<Action>,
    ) {
        let Deferred {
            action_type,
            skip_tracking,
            settled,
        } = deferred;
        let policy = self.policy;
        let view_change_counter = self.view_change_counter.clone();

        dispatcher.spawn(async move {
            let terminal = settled.await;
            let mut actions = vec![];

            if !skip_tracking {
                actions.push(Action::AsyncEnd {
                    subtype: action_type,
                });
            }

            let is_stale = view_change_counter.load(Ordering::SeqCst) != dispatched_at;
            if policy == StaleResultPolicy::DropAfterNavigation && !skip_tracking && is_stale
            {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🗑️ Drop result that settled after navigation",
                    action_type = %action_type
                );
            } else {
                actions.push(terminal);
            }

            actions
        });
    }
}

#[async_trait]
impl AsyncMiddleware<RootState, Action> for PromiseMiddleware {
    async fn before(
        &self,
        action: Action,
        state: RootState,
        dispatcher: Dispatcher<Action>,
    ) -> MiddlewareResult<Action> {
        let dispatched_at = state.common.view_change_counter;
        self.view_change_counter
            .store(dispatched_at, Ordering::SeqCst);

        let deferred = match action.into_deferred() {
            Ok(it) => it,
            Err(action) => return MiddlewareResult::Continue(action),
        };

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "⏳ Wait for pending payload",
            action_type = %deferred.action_type,
            skip_tracking = %deferred.skip_tracking
        );

        let start = (!deferred.skip_tracking).then_some(Action::AsyncStart {
            subtype: deferred.action_type,
        });
        self.spawn_settlement(deferred, dispatched_at, &dispatcher);

        match start {
            Some(start) => MiddlewareResult::Replace(vec![start]),
            None => MiddlewareResult::Drop,
        }
    }

    async fn after(&self, _action: &Action, state: &RootState) {
        self.view_change_counter
            .store(state.common.view_change_counter, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use std::{str::FromStr, time::Duration};

    use conduit_redux::QueueItem;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;
    use crate::{ActionType, ClientError, CommonState, ErrorBody, Payload, PendingValue,
                UserEnvelope, test_fixtures::sample_user};

    async fn drain(receiver: &mut UnboundedReceiver<QueueItem<Action>>) -> Vec<Action> {
        let mut actions = vec![];
        while let Some(item) = receiver.recv().await {
            match item {
                QueueItem::Action(action) => actions.push(action),
                QueueItem::Settled => break,
            }
        }
        actions
    }

    fn login(pending: PendingValue<UserEnvelope>) -> Action {
        Action::Login {
            payload: Payload::Pending(pending),
        }
    }

    fn signed_in() -> UserEnvelope {
        UserEnvelope {
            user: Some(sample_user("jake")),
        }
    }

    #[tokio::test]
    async fn test_settled_action_is_forwarded() {
        let (dispatcher, mut receiver) = Dispatcher::new_queue();
        let action = Action::Login {
            payload: Payload::Ready(signed_in()),
        };

        let result = PromiseMiddleware::default()
            .before(action.clone(), RootState::default(), dispatcher.clone())
            .await;

        assert_eq!(result, MiddlewareResult::Continue(action));
        assert_eq!(dispatcher.in_flight(), 0);
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_success_emits_start_end_then_result() {
        let (dispatcher, mut receiver) = Dispatcher::new_queue();

        let result = PromiseMiddleware::default()
            .before(
                login(PendingValue::resolved(signed_in())),
                RootState::default(),
                dispatcher,
            )
            .await;
        assert_eq!(
            result,
            MiddlewareResult::Replace(vec![Action::AsyncStart {
                subtype: ActionType::Login,
            }])
        );

        assert_eq!(drain(&mut receiver).await, vec![
            Action::AsyncEnd {
                subtype: ActionType::Login,
            },
            Action::Login {
                payload: Payload::Ready(signed_in()),
            },
        ]);
    }

    #[tokio::test]
    async fn test_failure_carries_validation_errors() {
        let (dispatcher, mut receiver) = Dispatcher::new_queue();
        let body = ErrorBody::from_pairs([("email or password", "is invalid")]);

        PromiseMiddleware::default()
            .before(
                login(PendingValue::rejected(ClientError::validation(body.clone()))),
                RootState::default(),
                dispatcher,
            )
            .await;

        let actions = drain(&mut receiver).await;
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1], Action::Login {
            payload: Payload::Failed(body),
        });
    }

    #[tokio::test]
    async fn test_untracked_action_has_no_start_or_end() {
        let (dispatcher, mut receiver) = Dispatcher::new_queue();
        let action = Action::AppLoad {
            token: Some("jwt-jake".into()),
            payload: Payload::Pending(PendingValue::resolved(Some(signed_in()))),
        };

        let result = PromiseMiddleware::default()
            .before(action, RootState::default(), dispatcher)
            .await;
        assert_eq!(result, MiddlewareResult::Drop);

        assert_eq!(drain(&mut receiver).await, vec![Action::AppLoad {
            token: Some("jwt-jake".into()),
            payload: Payload::Ready(Some(signed_in())),
        }]);
    }

    #[tokio::test]
    async fn test_untracked_failure_has_no_start_or_end() {
        let (dispatcher, mut receiver) = Dispatcher::new_queue();
        let action = Action::AppLoad {
            token: Some("jwt-jake".into()),
            payload: Payload::Pending(PendingValue::rejected(ClientError::transport(
                "Network error",
            ))),
        };

        let result = PromiseMiddleware::default()
            .before(action, RootState::default(), dispatcher)
            .await;
        assert_eq!(result, MiddlewareResult::Drop);

        assert_eq!(drain(&mut receiver).await, vec![Action::AppLoad {
            token: Some("jwt-jake".into()),
            payload: Payload::Failed(ErrorBody::generic("Network error")),
        }]);
    }

    #[tokio::test]
    async fn test_drop_after_navigation() {
        let (dispatcher, mut receiver) = Dispatcher::new_queue();
        let middleware =
            PromiseMiddleware::new_with_policy(StaleResultPolicy::DropAfterNavigation);

        middleware
            .before(
                login(PendingValue::delayed(
                    Duration::from_millis(20),
                    Ok(signed_in()),
                )),
                RootState::default(),
                dispatcher,
            )
            .await;

        // The user navigates away while the login is in flight.
        let navigated = RootState {
            common: Arc::new(CommonState {
                view_change_counter: 1,
                ..CommonState::default()
            }),
            ..RootState::default()
        };
        middleware.after(&Action::LoginPageUnloaded, &navigated).await;

        assert_eq!(drain(&mut receiver).await, vec![Action::AsyncEnd {
            subtype: ActionType::Login,
        }]);
    }

    #[tokio::test]
    async fn test_apply_keeps_results_after_navigation() {
        let (dispatcher, mut receiver) = Dispatcher::new_queue();
        let middleware = PromiseMiddleware::default();

        middleware
            .before(
                login(PendingValue::delayed(
                    Duration::from_millis(20),
                    Ok(signed_in()),
                )),
                RootState::default(),
                dispatcher,
            )
            .await;

        let navigated = RootState {
            common: Arc::new(CommonState {
                view_change_counter: 1,
                ..CommonState::default()
            }),
            ..RootState::default()
        };
        middleware.after(&Action::LoginPageUnloaded, &navigated).await;

        assert_eq!(drain(&mut receiver).await.len(), 2);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(StaleResultPolicy::DropAfterNavigation.to_string(), "drop");
        assert_eq!(
            StaleResultPolicy::from_str("apply").unwrap(),
            StaleResultPolicy::Apply
        );
    }
}
