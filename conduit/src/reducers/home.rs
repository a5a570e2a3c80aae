// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Action;

/// The popular tags sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeState {
    pub tags: Option<Vec<String>>,
}

pub fn reduce(state: &Arc<HomeState>, action: &Action) -> Arc<HomeState> {
    match action {
        Action::HomePageLoaded { payload, .. } => Arc::new(HomeState {
            tags: Some(
                payload
                    .ready()
                    .and_then(|it| it.0.as_ref())
                    .map(|it| it.tags.clone())
                    .unwrap_or_default(),
            ),
        }),
        Action::HomePageUnloaded => Arc::new(HomeState::default()),
        _ => state.clone(),
    }
}
