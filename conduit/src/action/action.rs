// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use futures::{FutureExt, future::BoxFuture};
use serde::Deserialize;

use crate::{ActionType, ArticleEnvelope, ArticlePagePayload, ArticlesEnvelope, AuthField,
            CommentEnvelope, EditorField, HomePagePayload, Pager, Payload,
            ProfileEnvelope, ProfilePagePayload, UserEnvelope};

/// Every state change request, and every result of one.
///
/// Each variant carries exactly the fields that its action can carry. Variants whose
/// data comes from the remote API carry a [`Payload`], which is pending when the action
/// is created, and ready (or failed) once the promise middleware has settled it.
///
/// In JSON, the variant is the `type` field, and the other fields are `snake_case`.
///
/// ```json
/// { "type": "UPDATE_FIELD_AUTH", "key": "email", "value": "jake@jake.jake" }
/// { "type": "LOGIN", "payload": { "ready": { "user": { "token": "T" } } } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// The app started. `token` is what was found in durable storage. The payload is
    /// `None` when there was no token to fetch the current user with.
    AppLoad {
        #[serde(default)]
        token: Option<String>,
        payload: Payload<Option<UserEnvelope>>,
    },
    /// The UI followed `common.redirect_to`.
    Redirect,
    Logout,
    Login {
        payload: Payload<UserEnvelope>,
    },
    Register {
        payload: Payload<UserEnvelope>,
    },
    LoginPageUnloaded,
    RegisterPageUnloaded,
    UpdateFieldAuth {
        key: AuthField,
        value: String,
    },
    /// Emitted by the promise middleware when it starts waiting on a payload.
    AsyncStart {
        subtype: ActionType,
    },
    /// Emitted by the promise middleware when a payload settled.
    AsyncEnd {
        subtype: ActionType,
    },
    HomePageLoaded {
        tab: String,
        #[serde(default)]
        pager: Pager,
        payload: Payload<HomePagePayload>,
    },
    HomePageUnloaded,
    ChangeTab {
        tab: String,
        #[serde(default)]
        pager: Pager,
        payload: Payload<ArticlesEnvelope>,
    },
    ApplyTagFilter {
        tag: String,
        #[serde(default)]
        pager: Pager,
        payload: Payload<ArticlesEnvelope>,
    },
    SetPage {
        page: u32,
        payload: Payload<ArticlesEnvelope>,
    },
    ArticleFavorited {
        payload: Payload<ArticleEnvelope>,
    },
    ArticleUnfavorited {
        payload: Payload<ArticleEnvelope>,
    },
    ArticlePageLoaded {
        payload: Payload<ArticlePagePayload>,
    },
    ArticlePageUnloaded,
    AddComment {
        payload: Payload<CommentEnvelope>,
    },
    DeleteComment {
        comment_id: u64,
        payload: Payload<()>,
    },
    DeleteArticle {
        payload: Payload<()>,
    },
    /// The payload is `None` when the editor opens for a new article.
    EditorPageLoaded {
        payload: Payload<Option<ArticleEnvelope>>,
    },
    EditorPageUnloaded,
    UpdateFieldEditor {
        key: EditorField,
        value: String,
    },
    /// Move the editor's tag input into its tag list.
    AddTag,
    RemoveTag {
        tag: String,
    },
    ArticleSubmitted {
        payload: Payload<ArticleEnvelope>,
    },
    ProfilePageLoaded {
        #[serde(default)]
        pager: Pager,
        payload: Payload<ProfilePagePayload>,
    },
    ProfilePageUnloaded,
    ProfileFavoritesPageLoaded {
        #[serde(default)]
        pager: Pager,
        payload: Payload<ProfilePagePayload>,
    },
    ProfileFavoritesPageUnloaded,
    FollowUser {
        payload: Payload<ProfileEnvelope>,
    },
    UnfollowUser {
        payload: Payload<ProfileEnvelope>,
    },
    SettingsSaved {
        payload: Payload<UserEnvelope>,
    },
    SettingsPageUnloaded,
}

/// An action whose payload is still pending, taken apart by [`Action::into_deferred`].
pub struct Deferred {
    pub action_type: ActionType,
    pub skip_tracking: bool,
    /// Resolves to the original action, with its payload settled.
    pub settled: BoxFuture<'static, Action>,
}

impl std::fmt::Debug for Deferred {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("action_type", &self.action_type)
            .field("skip_tracking", &self.skip_tracking)
            .finish_non_exhaustive()
    }
}

/// If `payload` is pending, defer it. Otherwise hand the action back, rebuilt as it was.
fn defer<T>(
    action_type: ActionType,
    payload: Payload<T>,
    rebuild: impl FnOnce(Payload<T>) -> Action + Send + 'static,
) -> Result<Deferred, Action>
where
    T: Clone + Send + Sync + 'static,
{
    match payload {
        Payload::Pending(pending) => Ok(Deferred {
            action_type,
            skip_tracking: action_type == ActionType::AppLoad,
            settled: async move { rebuild(pending.settle().await) }.boxed(),
        }),
        other => Err(rebuild(other)),
    }
}

impl Action {
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::AppLoad { .. } => ActionType::AppLoad,
            Action::Redirect => ActionType::Redirect,
            Action::Logout => ActionType::Logout,
            Action::Login { .. } => ActionType::Login,
            Action::Register { .. } => ActionType::Register,
            Action::LoginPageUnloaded => ActionType::LoginPageUnloaded,
            Action::RegisterPageUnloaded => ActionType::RegisterPageUnloaded,
            Action::UpdateFieldAuth { .. } => ActionType::UpdateFieldAuth,
            Action::AsyncStart { .. } => ActionType::AsyncStart,
            Action::AsyncEnd { .. } => ActionType::AsyncEnd,
            Action::HomePageLoaded { .. } => ActionType::HomePageLoaded,
            Action::HomePageUnloaded => ActionType::HomePageUnloaded,
            Action::ChangeTab { .. } => ActionType::ChangeTab,
            Action::ApplyTagFilter { .. } => ActionType::ApplyTagFilter,
            Action::SetPage { .. } => ActionType::SetPage,
            Action::ArticleFavorited { .. } => ActionType::ArticleFavorited,
            Action::ArticleUnfavorited { .. } => ActionType::ArticleUnfavorited,
            Action::ArticlePageLoaded { .. } => ActionType::ArticlePageLoaded,
            Action::ArticlePageUnloaded => ActionType::ArticlePageUnloaded,
            Action::AddComment { .. } => ActionType::AddComment,
            Action::DeleteComment { .. } => ActionType::DeleteComment,
            Action::DeleteArticle { .. } => ActionType::DeleteArticle,
            Action::EditorPageLoaded { .. } => ActionType::EditorPageLoaded,
            Action::EditorPageUnloaded => ActionType::EditorPageUnloaded,
            Action::UpdateFieldEditor { .. } => ActionType::UpdateFieldEditor,
            Action::AddTag => ActionType::AddTag,
            Action::RemoveTag { .. } => ActionType::RemoveTag,
            Action::ArticleSubmitted { .. } => ActionType::ArticleSubmitted,
            Action::ProfilePageLoaded { .. } => ActionType::ProfilePageLoaded,
            Action::ProfilePageUnloaded => ActionType::ProfilePageUnloaded,
            Action::ProfileFavoritesPageLoaded { .. } => {
                ActionType::ProfileFavoritesPageLoaded
            }
            Action::ProfileFavoritesPageUnloaded => {
                ActionType::ProfileFavoritesPageUnloaded
            }
            Action::FollowUser { .. } => ActionType::FollowUser,
            Action::UnfollowUser { .. } => ActionType::UnfollowUser,
            Action::SettingsSaved { .. } => ActionType::SettingsSaved,
            Action::SettingsPageUnloaded => ActionType::SettingsPageUnloaded,
        }
    }

    /// Whether the promise middleware should skip the start / end notifications for this
    /// action. Only app load is untracked, since no page shows progress for it.
    #[must_use]
    pub fn skip_tracking(&self) -> bool { matches!(self, Action::AppLoad { .. }) }

    /// Whether this action carries a payload that hasn't settled.
    #[must_use]
    pub fn has_pending_payload(&self) -> bool {
        match self {
            Action::AppLoad { payload, .. } => payload.is_pending(),
            Action::EditorPageLoaded { payload } => payload.is_pending(),
            Action::Login { payload }
            | Action::Register { payload }
            | Action::SettingsSaved { payload } => payload.is_pending(),
            Action::HomePageLoaded { payload, .. } => payload.is_pending(),
            Action::ChangeTab { payload, .. }
            | Action::ApplyTagFilter { payload, .. }
            | Action::SetPage { payload, .. } => payload.is_pending(),
            Action::ArticleFavorited { payload }
            | Action::ArticleUnfavorited { payload }
            | Action::ArticleSubmitted { payload } => payload.is_pending(),
            Action::ArticlePageLoaded { payload } => payload.is_pending(),
            Action::AddComment { payload } => payload.is_pending(),
            Action::DeleteComment { payload, .. } | Action::DeleteArticle { payload } => {
                payload.is_pending()
            }
            Action::ProfilePageLoaded { payload, .. }
            | Action::ProfileFavoritesPageLoaded { payload, .. } => payload.is_pending(),
            Action::FollowUser { payload } | Action::UnfollowUser { payload } => {
                payload.is_pending()
            }
            _ => false,
        }
    }

    /// Take apart an action whose payload is pending. The returned [`Deferred`] settles
    /// to a copy of this action with the payload settled. Actions that have nothing
    /// pending are handed back unchanged in `Err`.
    #[allow(clippy::too_many_lines)]
    pub fn into_deferred(self) -> Result<Deferred, Action> {
        let action_type = self.action_type();
        match self {
            Action::AppLoad { token, payload } => {
                defer(action_type, payload, move |payload| Action::AppLoad {
                    token,
                    payload,
                })
            }
            Action::Login { payload } => {
                defer(action_type, payload, |payload| Action::Login { payload })
            }
            Action::Register { payload } => {
                defer(action_type, payload, |payload| Action::Register { payload })
            }
            Action::SettingsSaved { payload } => {
                defer(action_type, payload, |payload| Action::SettingsSaved { payload })
            }
            Action::HomePageLoaded {
                tab,
                pager,
                payload,
            } => defer(action_type, payload, move |payload| Action::HomePageLoaded {
                tab,
                pager,
                payload,
            }),
            Action::ChangeTab {
                tab,
                pager,
                payload,
            } => defer(action_type, payload, move |payload| Action::ChangeTab {
                tab,
                pager,
                payload,
            }),
            Action::ApplyTagFilter {
                tag,
                pager,
                payload,
            } => defer(action_type, payload, move |payload| Action::ApplyTagFilter {
                tag,
                pager,
                payload,
            }),
            Action::SetPage { page, payload } => {
                defer(action_type, payload, move |payload| Action::SetPage {
                    page,
                    payload,
                })
            }
            Action::ArticleFavorited { payload } => {
                defer(action_type, payload, |payload| Action::ArticleFavorited {
                    payload,
                })
            }
            Action::ArticleUnfavorited { payload } => {
                defer(action_type, payload, |payload| Action::ArticleUnfavorited {
                    payload,
                })
            }
            Action::ArticlePageLoaded { payload } => {
                defer(action_type, payload, |payload| Action::ArticlePageLoaded {
                    payload,
                })
            }
            Action::AddComment { payload } => {
                defer(action_type, payload, |payload| Action::AddComment { payload })
            }
            Action::DeleteComment {
                comment_id,
                payload,
            } => defer(action_type, payload, move |payload| Action::DeleteComment {
                comment_id,
                payload,
            }),
            Action::DeleteArticle { payload } => {
                defer(action_type, payload, |payload| Action::DeleteArticle { payload })
            }
            Action::EditorPageLoaded { payload } => {
                defer(action_type, payload, |payload| Action::EditorPageLoaded {
                    payload,
                })
            }
            Action::ArticleSubmitted { payload } => {
                defer(action_type, payload, |payload| Action::ArticleSubmitted {
                    payload,
                })
            }
            Action::ProfilePageLoaded { pager, payload } => {
                defer(action_type, payload, move |payload| Action::ProfilePageLoaded {
                    pager,
                    payload,
                })
            }
            Action::ProfileFavoritesPageLoaded { pager, payload } => {
                defer(action_type, payload, move |payload| {
                    Action::ProfileFavoritesPageLoaded { pager, payload }
                })
            }
            Action::FollowUser { payload } => {
                defer(action_type, payload, |payload| Action::FollowUser { payload })
            }
            Action::UnfollowUser { payload } => {
                defer(action_type, payload, |payload| Action::UnfollowUser { payload })
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ClientError, ErrorBody, PendingValue};

    #[test]
    fn test_action_type_matches_json_tag() {
        let json = r#"{ "type": "REMOVE_TAG", "tag": "rust" }"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action.action_type().to_string(), "REMOVE_TAG");
        assert_eq!(
            action,
            Action::RemoveTag {
                tag: "rust".into()
            }
        );
    }

    #[test]
    fn test_unknown_field_key_is_rejected() {
        let json = r#"{ "type": "UPDATE_FIELD_AUTH", "key": "token", "value": "x" }"#;
        assert!(serde_json::from_str::<Action>(json).is_err());
    }

    #[test]
    fn test_ready_action_is_not_deferred() {
        let action = Action::SetPage {
            page: 2,
            payload: Payload::Ready(ArticlesEnvelope::default()),
        };
        assert!(!action.has_pending_payload());
        assert_eq!(action.clone().into_deferred().unwrap_err(), action);
        assert_eq!(Action::Logout.into_deferred().unwrap_err(), Action::Logout);
    }

    #[tokio::test]
    async fn test_deferred_settles_to_original_action() {
        let action = Action::DeleteComment {
            comment_id: 7,
            payload: Payload::Pending(PendingValue::resolved(())),
        };
        assert!(action.has_pending_payload());

        let deferred = action.into_deferred().unwrap();
        assert_eq!(deferred.action_type, ActionType::DeleteComment);
        assert!(!deferred.skip_tracking);
        assert_eq!(
            deferred.settled.await,
            Action::DeleteComment {
                comment_id: 7,
                payload: Payload::Ready(())
            }
        );
    }

    #[tokio::test]
    async fn test_deferred_failure_is_error_shaped() {
        let action = Action::AppLoad {
            token: Some("T".into()),
            payload: Payload::Pending(PendingValue::rejected(ClientError::transport(
                "down",
            ))),
        };
        assert!(action.skip_tracking());

        let deferred = action.into_deferred().unwrap();
        assert!(deferred.skip_tracking);
        assert_eq!(
            deferred.settled.await,
            Action::AppLoad {
                token: Some("T".into()),
                payload: Payload::Failed(ErrorBody::generic("down")),
            }
        );
    }
}
