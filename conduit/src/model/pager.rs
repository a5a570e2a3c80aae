// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Which list of articles an article list view is showing, so that asking for another
/// page of it fetches the same query. See [`crate::ConduitApi::fetch_page`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Pager {
    /// The global feed.
    #[default]
    All,
    /// Articles by authors the signed in user follows.
    Feed,
    /// Articles with this tag.
    Tag(String),
    /// Articles written by this user.
    Author(String),
    /// Articles favorited by this user.
    FavoritedBy(String),
}

impl Pager {
    /// The home page tabs are named `"feed"` and `"all"`.
    pub fn for_tab(tab: &str) -> Self {
        match tab {
            "feed" => Pager::Feed,
            _ => Pager::All,
        }
    }
}
