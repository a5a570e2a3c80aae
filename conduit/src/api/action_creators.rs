// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use futures::future::try_join;

use crate::{Action, ActionType, Article, ArticlePagePayload, ArticlesEnvelope, AuthField,
            ClientError, ConduitApi, EditorField, EditorState, HomePagePayload, JWT_KEY,
            Pager, Payload, ProfilePagePayload, TokenStore, UserUpdate};

/// Turns UI intents into [`Action`]s. Actions that need the remote API get a pending
/// [`Payload`], which does nothing until the promise middleware awaits it.
#[derive(Clone)]
pub struct ActionCreators {
    pub api: Arc<dyn ConduitApi>,
    pub token_store: Arc<dyn TokenStore>,
}

impl Debug for ActionCreators {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCreators")
            .field("api", &self.api)
            .field("token_store", &self.token_store)
            .finish()
    }
}

impl ActionCreators {
    pub fn new(api: Arc<dyn ConduitApi>, token_store: Arc<dyn TokenStore>) -> Self {
        Self { api, token_store }
    }

    /// Read the token from durable storage, hand it to the API, and fetch the current
    /// user with it. Without a token there is nothing to fetch.
    #[must_use]
    pub fn app_load(&self) -> Action {
        let token = match self.token_store.get_item(JWT_KEY) {
            Ok(it) => it.filter(|it| !it.is_empty()),
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "🔑 Could not read token, starting signed out",
                    error = ?report
                );
                None
            }
        };
        self.api.set_token(token.clone());

        let payload = match token {
            Some(_) => {
                let api = self.api.clone();
                Payload::pending(async move { api.current_user().await.map(Some) })
            }
            None => Payload::Ready(None),
        };
        Action::AppLoad { token, payload }
    }

    #[must_use]
    pub fn redirect() -> Action { Action::Redirect }

    #[must_use]
    pub fn logout() -> Action { Action::Logout }

    #[must_use]
    pub fn update_field_auth(key: AuthField, value: impl Into<String>) -> Action {
        Action::UpdateFieldAuth {
            key,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn login(&self, email: &str, password: &str) -> Action {
        let api = self.api.clone();
        let (email, password) = (email.to_string(), password.to_string());
        Action::Login {
            payload: Payload::pending(async move { api.login(&email, &password).await }),
        }
    }

    #[must_use]
    pub fn register(&self, username: &str, email: &str, password: &str) -> Action {
        let api = self.api.clone();
        let (username, email, password) =
            (username.to_string(), email.to_string(), password.to_string());
        Action::Register {
            payload: Payload::pending(async move {
                api.register(&username, &email, &password).await
            }),
        }
    }

    #[must_use]
    pub fn save_settings(&self, update: UserUpdate) -> Action {
        let api = self.api.clone();
        Action::SettingsSaved {
            payload: Payload::pending(async move { api.save_user(&update).await }),
        }
    }

    /// Signed in users start on their own feed, everyone else on the global one.
    #[must_use]
    pub fn home_page_loaded(&self, token: Option<&str>) -> Action {
        let tab = if token.is_some() { "feed" } else { "all" };
        let pager = Pager::for_tab(tab);
        let (api, page_pager) = (self.api.clone(), pager.clone());
        Action::HomePageLoaded {
            tab: tab.to_string(),
            pager,
            payload: Payload::pending(async move {
                let (tags, articles) =
                    try_join(api.tags_all(), api.fetch_page(&page_pager, 0)).await?;
                Ok::<_, ClientError>(HomePagePayload(Some(tags), Some(articles)))
            }),
        }
    }

    #[must_use]
    pub fn change_tab(&self, tab: &str) -> Action {
        let pager = Pager::for_tab(tab);
        Action::ChangeTab {
            tab: tab.to_string(),
            pager: pager.clone(),
            payload: self.first_page(pager),
        }
    }

    #[must_use]
    pub fn apply_tag_filter(&self, tag: &str) -> Action {
        let pager = Pager::Tag(tag.to_string());
        Action::ApplyTagFilter {
            tag: tag.to_string(),
            pager: pager.clone(),
            payload: self.first_page(pager),
        }
    }

    /// Fetch another page of whatever list `pager` describes.
    #[must_use]
    pub fn set_page(&self, pager: &Pager, page: u32) -> Action {
        let (api, pager) = (self.api.clone(), pager.clone());
        Action::SetPage {
            page,
            payload: Payload::pending(async move { api.fetch_page(&pager, page).await }),
        }
    }

    fn first_page(&self, pager: Pager) -> Payload<ArticlesEnvelope> {
        let api = self.api.clone();
        Payload::pending(async move { api.fetch_page(&pager, 0).await })
    }

    /// Favorite `article`, or unfavorite it if it already is.
    #[must_use]
    pub fn toggle_favorite(&self, article: &Article) -> Action {
        let (api, slug) = (self.api.clone(), article.slug.clone());
        if article.favorited {
            Action::ArticleUnfavorited {
                payload: Payload::pending(async move { api.unfavorite(&slug).await }),
            }
        } else {
            Action::ArticleFavorited {
                payload: Payload::pending(async move { api.favorite(&slug).await }),
            }
        }
    }

    #[must_use]
    pub fn article_page_loaded(&self, slug: &str) -> Action {
        let (api, slug) = (self.api.clone(), slug.to_string());
        Action::ArticlePageLoaded {
            payload: Payload::pending(async move {
                let (article, comments) =
                    try_join(api.get_article(&slug), api.comments_for(&slug)).await?;
                Ok::<_, ClientError>(ArticlePagePayload(Some(article), Some(comments)))
            }),
        }
    }

    #[must_use]
    pub fn add_comment(&self, slug: &str, body: &str) -> Action {
        let (api, slug, body) = (self.api.clone(), slug.to_string(), body.to_string());
        Action::AddComment {
            payload: Payload::pending(async move {
                api.create_comment(&slug, &body).await
            }),
        }
    }

    #[must_use]
    pub fn delete_comment(&self, slug: &str, comment_id: u64) -> Action {
        let (api, slug) = (self.api.clone(), slug.to_string());
        Action::DeleteComment {
            comment_id,
            payload: Payload::pending(async move {
                api.delete_comment(&slug, comment_id).await
            }),
        }
    }

    #[must_use]
    pub fn delete_article(&self, slug: &str) -> Action {
        let (api, slug) = (self.api.clone(), slug.to_string());
        Action::DeleteArticle {
            payload: Payload::pending(async move { api.delete_article(&slug).await }),
        }
    }

    /// Open the editor. With a `slug`, the article is fetched so it can be edited,
    /// otherwise the editor starts blank.
    #[must_use]
    pub fn editor_page_loaded(&self, slug: Option<&str>) -> Action {
        let payload = match slug {
            Some(slug) => {
                let (api, slug) = (self.api.clone(), slug.to_string());
                Payload::pending(async move { api.get_article(&slug).await.map(Some) })
            }
            None => Payload::Ready(None),
        };
        Action::EditorPageLoaded { payload }
    }

    #[must_use]
    pub fn update_field_editor(key: EditorField, value: impl Into<String>) -> Action {
        Action::UpdateFieldEditor {
            key,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn add_tag() -> Action { Action::AddTag }

    #[must_use]
    pub fn remove_tag(tag: &str) -> Action {
        Action::RemoveTag {
            tag: tag.to_string(),
        }
    }

    /// Create a new article, or update the one being edited.
    #[must_use]
    pub fn submit_article(&self, editor: &EditorState) -> Action {
        let (api, draft) = (self.api.clone(), editor.draft());
        let payload = match editor.article_slug.clone().filter(|it| !it.is_empty()) {
            Some(slug) => {
                Payload::pending(async move { api.update_article(&slug, &draft).await })
            }
            None => Payload::pending(async move { api.create_article(&draft).await }),
        };
        Action::ArticleSubmitted { payload }
    }

    #[must_use]
    pub fn profile_page_loaded(&self, username: &str) -> Action {
        let pager = Pager::Author(username.to_string());
        Action::ProfilePageLoaded {
            pager: pager.clone(),
            payload: self.profile_page(username, pager),
        }
    }

    #[must_use]
    pub fn profile_favorites_page_loaded(&self, username: &str) -> Action {
        let pager = Pager::FavoritedBy(username.to_string());
        Action::ProfileFavoritesPageLoaded {
            pager: pager.clone(),
            payload: self.profile_page(username, pager),
        }
    }

    fn profile_page(&self, username: &str, pager: Pager) -> Payload<ProfilePagePayload> {
        let (api, username) = (self.api.clone(), username.to_string());
        Payload::pending(async move {
            let (profile, articles) =
                try_join(api.get_profile(&username), api.fetch_page(&pager, 0)).await?;
            Ok::<_, ClientError>(ProfilePagePayload(Some(profile), Some(articles)))
        })
    }

    #[must_use]
    pub fn follow_user(&self, username: &str) -> Action {
        let (api, username) = (self.api.clone(), username.to_string());
        Action::FollowUser {
            payload: Payload::pending(async move { api.follow(&username).await }),
        }
    }

    #[must_use]
    pub fn unfollow_user(&self, username: &str) -> Action {
        let (api, username) = (self.api.clone(), username.to_string());
        Action::UnfollowUser {
            payload: Payload::pending(async move { api.unfollow(&username).await }),
        }
    }

    /// The "page unloaded" action for `action_type`, if it is one.
    #[must_use]
    pub fn page_unloaded(action_type: ActionType) -> Option<Action> {
        Some(match action_type {
            ActionType::LoginPageUnloaded => Action::LoginPageUnloaded,
            ActionType::RegisterPageUnloaded => Action::RegisterPageUnloaded,
            ActionType::HomePageUnloaded => Action::HomePageUnloaded,
            ActionType::ArticlePageUnloaded => Action::ArticlePageUnloaded,
            ActionType::EditorPageUnloaded => Action::EditorPageUnloaded,
            ActionType::ProfilePageUnloaded => Action::ProfilePageUnloaded,
            ActionType::ProfileFavoritesPageUnloaded => {
                Action::ProfileFavoritesPageUnloaded
            }
            ActionType::SettingsPageUnloaded => Action::SettingsPageUnloaded,
            _ => return None,
        })
    }
}
