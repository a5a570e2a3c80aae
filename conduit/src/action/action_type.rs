// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The closed vocabulary of action tags. Every [`crate::Action`] maps to exactly one of
/// these via [`crate::Action::action_type`]. They print as `SCREAMING_SNAKE_CASE`, for
/// example `ActionType::HomePageLoaded` is `"HOME_PAGE_LOADED"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
         strum_macros::Display, strum_macros::EnumString, strum_macros::AsRefStr,
         strum_macros::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    AppLoad,
    Redirect,
    Logout,
    Login,
    Register,
    LoginPageUnloaded,
    RegisterPageUnloaded,
    UpdateFieldAuth,
    AsyncStart,
    AsyncEnd,
    HomePageLoaded,
    HomePageUnloaded,
    ChangeTab,
    ApplyTagFilter,
    SetPage,
    ArticleFavorited,
    ArticleUnfavorited,
    ArticlePageLoaded,
    ArticlePageUnloaded,
    AddComment,
    DeleteComment,
    DeleteArticle,
    EditorPageLoaded,
    EditorPageUnloaded,
    UpdateFieldEditor,
    AddTag,
    RemoveTag,
    ArticleSubmitted,
    ProfilePageLoaded,
    ProfilePageUnloaded,
    ProfileFavoritesPageLoaded,
    ProfileFavoritesPageUnloaded,
    FollowUser,
    UnfollowUser,
    SettingsSaved,
    SettingsPageUnloaded,
}

impl ActionType {
    /// The "page unloaded" family. These reset a slice, and count as a navigation.
    #[must_use]
    pub fn is_page_unloaded(self) -> bool {
        matches!(
            self,
            ActionType::LoginPageUnloaded
                | ActionType::RegisterPageUnloaded
                | ActionType::HomePageUnloaded
                | ActionType::ArticlePageUnloaded
                | ActionType::EditorPageUnloaded
                | ActionType::ProfilePageUnloaded
                | ActionType::ProfileFavoritesPageUnloaded
                | ActionType::SettingsPageUnloaded
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(ActionType::HomePageLoaded.to_string(), "HOME_PAGE_LOADED");
        assert_eq!(
            ActionType::from_str("PROFILE_FAVORITES_PAGE_UNLOADED").unwrap(),
            ActionType::ProfileFavoritesPageUnloaded
        );
        assert!(ActionType::from_str("UNKNOWN").is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for it in ActionType::iter() {
            let json = serde_json::to_value(it).unwrap();
            assert_eq!(json, serde_json::Value::String(it.to_string()));
        }
    }

    #[test]
    fn test_there_are_eight_pages_that_unload() {
        assert_eq!(ActionType::iter().filter(|it| it.is_page_unloaded()).count(), 8);
    }
}
