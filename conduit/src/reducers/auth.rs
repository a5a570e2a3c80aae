// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, ActionType, AuthField, ValidationErrors};

/// Sign in and sign up forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthState {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub in_progress: bool,
    pub errors: Option<ValidationErrors>,
}

pub fn reduce(state: &Arc<AuthState>, action: &Action) -> Arc<AuthState> {
    let it = state.as_ref();
    let next = match action {
        Action::Login { payload } | Action::Register { payload } => AuthState {
            in_progress: false,
            errors: payload.errors().cloned(),
            ..it.clone()
        },
        Action::LoginPageUnloaded | Action::RegisterPageUnloaded => AuthState::default(),
        Action::AsyncStart {
            subtype: ActionType::Login | ActionType::Register,
        } => AuthState {
            in_progress: true,
            ..it.clone()
        },
        Action::UpdateFieldAuth { key, value } => {
            let mut next = it.clone();
            let field = match key {
                AuthField::Email => &mut next.email,
                AuthField::Password => &mut next.password,
                AuthField::Username => &mut next.username,
            };
            *field = Some(value.clone());
            next
        }
        _ => return state.clone(),
    };
    Arc::new(next)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorBody, Payload, UserEnvelope, test_fixtures::sample_user};

    #[test]
    fn test_default_and_unrelated_actions() {
        let state = Arc::new(AuthState::default());
        assert!(Arc::ptr_eq(&state, &reduce(&state, &Action::Logout)));
        assert!(Arc::ptr_eq(&state, &reduce(&state, &Action::AsyncStart {
            subtype: ActionType::ArticleSubmitted
        })));
    }

    #[test]
    fn test_async_start_for_login_and_register() {
        let state = Arc::new(AuthState::default());
        for subtype in [ActionType::Login, ActionType::Register] {
            let next = reduce(&state, &Action::AsyncStart { subtype });
            assert!(next.in_progress);
        }
    }

    #[test]
    fn test_login_clears_progress_and_sets_errors() {
        let state = Arc::new(AuthState {
            in_progress: true,
            ..AuthState::default()
        });

        let next = reduce(&state, &Action::Login {
            payload: Payload::Ready(UserEnvelope {
                user: Some(sample_user("jake")),
            }),
        });
        assert!(!next.in_progress);
        assert_eq!(next.errors, None);

        let body = ErrorBody::from_pairs([("email or password", "is invalid")]);
        let next = reduce(&state, &Action::Register {
            payload: Payload::Failed(body.clone()),
        });
        assert!(!next.in_progress);
        assert_eq!(next.errors, body.errors);

        assert!(state.in_progress);
    }

    #[test]
    fn test_update_field() {
        let state = Arc::new(AuthState::default());
        let next = reduce(&state, &Action::UpdateFieldAuth {
            key: AuthField::Email,
            value: "jake@jake.jake".into(),
        });
        let next = reduce(&next, &Action::UpdateFieldAuth {
            key: AuthField::Password,
            value: "jakejake".into(),
        });
        assert_eq!(next.email.as_deref(), Some("jake@jake.jake"));
        assert_eq!(next.password.as_deref(), Some("jakejake"));
        assert_eq!(next.username, None);
    }

    #[test]
    fn test_page_unloaded_resets_and_is_idempotent() {
        let state = Arc::new(AuthState {
            email: Some("a@b.c".into()),
            in_progress: true,
            ..AuthState::default()
        });
        let once = reduce(&state, &Action::LoginPageUnloaded);
        let twice = reduce(&once, &Action::RegisterPageUnloaded);
        assert_eq!(*once, AuthState::default());
        assert_eq!(once, twice);
    }
}
