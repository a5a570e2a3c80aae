// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use conduit_redux::{SharedStore, Store};
use tokio::sync::RwLock;

use crate::{Action, ConduitApi, ConduitConfig, PromiseMiddleware, RootReducer, RootState,
            TokenPersistenceMiddleware, TokenStore};

pub type ConduitStore = Store<RootState, Action>;

/// A store with [`RootReducer`], then [`PromiseMiddleware`] (using the config's stale
/// result policy) followed by [`TokenPersistenceMiddleware`].
///
/// Pass the same `api` that the [`crate::ActionCreators`] use, so that it picks up the
/// token on login and loses it on logout.
#[must_use]
pub fn new_conduit_store(
    config: &ConduitConfig,
    token_store: Arc<dyn TokenStore>,
    maybe_api: Option<Arc<dyn ConduitApi>>,
) -> ConduitStore {
    let mut store = ConduitStore::default();

    let token_persistence = match maybe_api {
        Some(api) => TokenPersistenceMiddleware::new(token_store).with_api(api),
        None => TokenPersistenceMiddleware::new(token_store),
    };

    store
        .add_reducer(Box::new(RootReducer))
        .add_middleware(Box::new(PromiseMiddleware::new_with_policy(
            config.stale_result_policy,
        )))
        .add_middleware(Box::new(token_persistence));

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🏪 Create store",
        stale_result_policy = %config.stale_result_policy
    );

    store
}

/// Same as [`new_conduit_store`], but shareable between tasks.
#[must_use]
pub fn new_shared_conduit_store(
    config: &ConduitConfig,
    token_store: Arc<dyn TokenStore>,
    maybe_api: Option<Arc<dyn ConduitApi>>,
) -> SharedStore<RootState, Action> {
    Arc::new(RwLock::new(new_conduit_store(config, token_store, maybe_api)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{InMemoryTokenStore, JWT_KEY, Payload, PendingValue, UserEnvelope,
                test_fixtures::sample_user};

    #[tokio::test]
    async fn test_login_flows_through_both_middleware() -> miette::Result<()> {
        let token_store = Arc::new(InMemoryTokenStore::default());
        let mut store =
            new_conduit_store(&ConduitConfig::default(), token_store.clone(), None);

        store
            .dispatch_action(Action::Login {
                payload: Payload::Pending(PendingValue::resolved(UserEnvelope {
                    user: Some(sample_user("jake")),
                })),
            })
            .await;
        assert!(store.get_state().auth.in_progress);

        store.run_until_idle().await;

        let state = store.get_state();
        assert!(!state.auth.in_progress);
        assert_eq!(state.common.token.as_deref(), Some("jwt-jake"));
        assert_eq!(token_store.get_item(JWT_KEY)?.as_deref(), Some("jwt-jake"));
        Ok(())
    }

    #[tokio::test]
    async fn test_shared_store() {
        let store = new_shared_conduit_store(
            &ConduitConfig::default(),
            Arc::new(InMemoryTokenStore::default()),
            None,
        );
        let store_copy = store.clone();
        tokio::spawn(async move {
            store_copy.write().await.dispatch_action(Action::Logout).await;
        })
        .await
        .unwrap();

        let mut store = store.write().await;
        store.run_until_idle().await;
        assert_eq!(store.get_state().common.redirect_to.as_deref(), Some("/"));
    }
}
