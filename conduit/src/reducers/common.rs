// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, User};

pub const DEFAULT_APP_NAME: &str = "Conduit";

/// App shell state. Unlike every other slice, this one is never reset. Leaving a page
/// only bumps [`CommonState::view_change_counter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonState {
    pub app_name: String,
    pub token: Option<String>,
    pub current_user: Option<User>,
    pub app_loaded: bool,
    /// Where the UI should navigate to next. Cleared by [`Action::Redirect`].
    pub redirect_to: Option<String>,
    /// Number of "page unloaded" actions seen so far.
    pub view_change_counter: u64,
}

impl Default for CommonState {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            token: None,
            current_user: None,
            app_loaded: false,
            redirect_to: None,
            view_change_counter: 0,
        }
    }
}

pub fn reduce(state: &Arc<CommonState>, action: &Action) -> Arc<CommonState> {
    let it = state.as_ref();
    let next = match action {
        Action::AppLoad { token, payload } => CommonState {
            token: token.clone(),
            current_user: payload
                .ready()
                .and_then(Option::as_ref)
                .and_then(|it| it.user.clone()),
            app_loaded: true,
            ..it.clone()
        },
        Action::Redirect => CommonState {
            redirect_to: None,
            ..it.clone()
        },
        Action::Logout => CommonState {
            redirect_to: Some("/".to_string()),
            token: None,
            current_user: None,
            ..it.clone()
        },
        Action::ArticleSubmitted { payload } => CommonState {
            redirect_to: payload
                .ready()
                .and_then(|it| it.article.as_ref())
                .map(|article| format!("/article/{}", article.slug)),
            ..it.clone()
        },
        Action::SettingsSaved { payload } => {
            let user = payload.ready().and_then(|it| it.user.clone());
            CommonState {
                redirect_to: payload.ready().map(|_| "/".to_string()),
                current_user: user,
                ..it.clone()
            }
        }
        Action::Login { payload } | Action::Register { payload } => {
            let user = payload.ready().and_then(|it| it.user.clone());
            CommonState {
                redirect_to: payload.ready().map(|_| "/".to_string()),
                token: user.as_ref().map(|it| it.token.clone()),
                current_user: user,
                ..it.clone()
            }
        }
        Action::DeleteArticle { .. } => CommonState {
            redirect_to: Some("/".to_string()),
            ..it.clone()
        },
        _ if action.action_type().is_page_unloaded() => CommonState {
            view_change_counter: it.view_change_counter + 1,
            ..it.clone()
        },
        _ => return state.clone(),
    };
    Arc::new(next)
}
