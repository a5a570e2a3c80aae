// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, ActionType, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsState {
    pub in_progress: bool,
    pub errors: Option<ValidationErrors>,
}

pub fn reduce(state: &Arc<SettingsState>, action: &Action) -> Arc<SettingsState> {
    match action {
        Action::SettingsSaved { payload } => Arc::new(SettingsState {
            in_progress: false,
            errors: payload.errors().cloned(),
        }),
        Action::SettingsPageUnloaded => Arc::new(SettingsState::default()),
        Action::AsyncStart {
            subtype: ActionType::SettingsSaved,
        } => Arc::new(SettingsState {
            in_progress: true,
            ..state.as_ref().clone()
        }),
        _ => state.clone(),
    }
}
