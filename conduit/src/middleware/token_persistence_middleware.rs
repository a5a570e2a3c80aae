// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use async_trait::async_trait;
use conduit_redux::AsyncMiddleware;

use crate::{Action, ConduitApi, JWT_KEY, RootState, TokenStore};

/// Mirrors the credential token into a [`TokenStore`], under [`JWT_KEY`]. It only acts
/// once the reducers have seen an action, and never changes or drops one.
///
/// - A successful login or register with a non empty token saves that token.
/// - Logout removes it.
/// - Everything else, including failed logins, is ignored.
///
/// If an API client is attached, it is handed the same token, so that the requests
/// that follow are made on behalf of the right user. Storage failures are logged and
/// swallowed.
#[derive(Debug)]
pub struct TokenPersistenceMiddleware {
    pub token_store: Arc<dyn TokenStore>,
    pub maybe_api: Option<Arc<dyn ConduitApi>>,
}

impl TokenPersistenceMiddleware {
    pub fn new(token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            token_store,
            maybe_api: None,
        }
    }

    #[must_use]
    pub fn with_api(mut self, api: Arc<dyn ConduitApi>) -> Self {
        self.maybe_api = Some(api);
        self
    }

    fn save(&self, token: &str) {
        if let Err(report) = self.token_store.set_item(JWT_KEY, token) {
            // % is Display, ? is Debug.
            tracing::warn!(message = "🔑 Could not save token", error = ?report);
        }
        if let Some(api) = &self.maybe_api {
            api.set_token(Some(token.to_string()));
        }
    }

    fn forget(&self) {
        if let Err(report) = self.token_store.remove_item(JWT_KEY) {
            // % is Display, ? is Debug.
            tracing::warn!(message = "🔑 Could not remove token", error = ?report);
        }
        if let Some(api) = &self.maybe_api {
            api.set_token(None);
        }
    }
}

#[async_trait]
impl AsyncMiddleware<RootState, Action> for TokenPersistenceMiddleware {
    async fn after(&self, action: &Action, _state: &RootState) {
        match action {
            Action::Login { payload } | Action::Register { payload } => {
                let maybe_token = payload
                    .ready()
                    .and_then(|it| it.user.as_ref())
                    .map(|it| it.token.as_str())
                    .filter(|it| !it.is_empty());
                if let Some(token) = maybe_token {
                    self.save(token);
                }
            }
            Action::Logout => self.forget(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorBody, InMemoryTokenStore, Payload, User, UserEnvelope,
                test_fixtures::{FakeConduitApi, sample_user}};

    fn setup() -> (Arc<InMemoryTokenStore>, Arc<FakeConduitApi>, TokenPersistenceMiddleware) {
        let token_store = Arc::new(InMemoryTokenStore::default());
        let api = Arc::new(FakeConduitApi::default());
        let middleware =
            TokenPersistenceMiddleware::new(token_store.clone()).with_api(api.clone());
        (token_store, api, middleware)
    }

    fn login_with(user: Option<User>) -> Action {
        Action::Login {
            payload: Payload::Ready(UserEnvelope { user }),
        }
    }

    #[tokio::test]
    async fn test_login_saves_then_logout_removes() -> miette::Result<()> {
        let (token_store, api, middleware) = setup();
        let state = RootState::default();

        middleware
            .after(&login_with(Some(sample_user("jake"))), &state)
            .await;
        assert_eq!(token_store.get_item(JWT_KEY)?.as_deref(), Some("jwt-jake"));
        assert_eq!(api.token().as_deref(), Some("jwt-jake"));
        assert_eq!(token_store.write_count(), 1);

        middleware.after(&Action::Logout, &state).await;
        assert_eq!(token_store.get_item(JWT_KEY)?, None);
        assert_eq!(api.token(), None);
        assert_eq!(token_store.delete_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_register_saves() -> miette::Result<()> {
        let (token_store, _, middleware) = setup();
        let action = Action::Register {
            payload: Payload::Ready(UserEnvelope {
                user: Some(sample_user("ann")),
            }),
        };
        middleware.after(&action, &RootState::default()).await;
        assert_eq!(token_store.get_item(JWT_KEY)?.as_deref(), Some("jwt-ann"));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_or_tokenless_auth_is_ignored() {
        let (token_store, api, middleware) = setup();
        let state = RootState::default();

        let failed = Action::Login {
            payload: Payload::Failed(ErrorBody::from_pairs([("email", "is invalid")])),
        };
        let empty_token = login_with(Some(User {
            token: String::new(),
            ..sample_user("jake")
        }));

        for action in [failed, empty_token, login_with(None), Action::AddTag] {
            middleware.after(&action, &state).await;
        }

        assert_eq!(token_store.write_count(), 0);
        assert_eq!(token_store.delete_count(), 0);
        assert_eq!(api.token(), None);
    }

    #[tokio::test]
    async fn test_before_forwards_unchanged() {
        let (_, _, middleware) = setup();
        let (dispatcher, _receiver) = conduit_redux::Dispatcher::new_queue();
        let result = middleware
            .before(Action::Logout, RootState::default(), dispatcher)
            .await;
        assert_eq!(result, conduit_redux::MiddlewareResult::Continue(Action::Logout));
    }
}
