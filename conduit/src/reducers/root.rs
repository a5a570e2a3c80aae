// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use conduit_redux::Reducer;
use serde::{Deserialize, Serialize};

use super::{article, article_list, auth, common, editor, home, profile, settings};
use crate::{Action, ArticleListState, ArticleState, AuthState, CommonState, EditorState,
            HomeState, ProfileState, SettingsState};

/// The whole app state: one field per slice. Slices are behind [`Arc`]s, and a slice
/// that an action doesn't concern keeps the same allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RootState {
    pub common: Arc<CommonState>,
    pub auth: Arc<AuthState>,
    pub editor: Arc<EditorState>,
    pub article: Arc<ArticleState>,
    pub article_list: Arc<ArticleListState>,
    pub home: Arc<HomeState>,
    pub profile: Arc<ProfileState>,
    pub settings: Arc<SettingsState>,
}

/// Fans every action out to all the slice reducers.
#[derive(Debug, Default)]
pub struct RootReducer;

impl Reducer<RootState, Action> for RootReducer {
    fn run(&self, action: &Action, state: &RootState) -> RootState {
        // Reducers only ever see settled payloads.
        if action.has_pending_payload() {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⏳ Skip action with pending payload",
                action_type = %action.action_type()
            );
            return state.clone();
        }

        RootState {
            common: common::reduce(&state.common, action),
            auth: auth::reduce(&state.auth, action),
            editor: editor::reduce(&state.editor, action),
            article: article::reduce(&state.article, action),
            article_list: article_list::reduce(&state.article_list, action),
            home: home::reduce(&state.home, action),
            profile: profile::reduce(&state.profile, action),
            settings: settings::reduce(&state.settings, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ActionType, PendingValue, Payload, UserEnvelope};

    #[test]
    fn test_only_concerned_slices_change() {
        let state = RootState::default();
        let next = RootReducer.run(
            &Action::AsyncStart {
                subtype: ActionType::Login,
            },
            &state,
        );

        assert!(next.auth.in_progress);
        assert!(!Arc::ptr_eq(&state.auth, &next.auth));
        assert!(Arc::ptr_eq(&state.common, &next.common));
        assert!(Arc::ptr_eq(&state.editor, &next.editor));
        assert!(Arc::ptr_eq(&state.article, &next.article));
        assert!(Arc::ptr_eq(&state.article_list, &next.article_list));
        assert!(Arc::ptr_eq(&state.home, &next.home));
        assert!(Arc::ptr_eq(&state.profile, &next.profile));
        assert!(Arc::ptr_eq(&state.settings, &next.settings));
    }

    #[test]
    fn test_page_unloaded_resets_slice_and_counts_navigation() {
        let state = RootReducer.run(
            &Action::AsyncStart {
                subtype: ActionType::SettingsSaved,
            },
            &RootState::default(),
        );
        let next = RootReducer.run(&Action::SettingsPageUnloaded, &state);
        assert_eq!(*next.settings, SettingsState::default());
        assert_eq!(next.common.view_change_counter, 1);
    }

    #[test]
    fn test_pending_payload_is_ignored() {
        let state = RootState::default();
        let next = RootReducer.run(
            &Action::Login {
                payload: Payload::Pending(PendingValue::resolved(UserEnvelope::default())),
            },
            &state,
        );
        assert_eq!(next, state);
        assert!(Arc::ptr_eq(&state.common, &next.common));
    }

    #[test]
    fn test_state_serializes_with_camel_case_slices() {
        let json = serde_json::to_value(RootState::default()).unwrap();
        assert_eq!(json["common"]["appName"], "Conduit");
        assert_eq!(json["common"]["viewChangeCounter"], 0);
        assert!(json["articleList"].is_object());
    }
}
