// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, Article, Comment, ValidationErrors};

/// The article that is open, and its comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleState {
    pub article: Option<Article>,
    pub comments: Option<Vec<Comment>>,
    pub comment_errors: Option<ValidationErrors>,
}

pub fn reduce(state: &Arc<ArticleState>, action: &Action) -> Arc<ArticleState> {
    let it = state.as_ref();
    let next = match action {
        Action::ArticlePageLoaded { payload } => {
            let loaded = payload.ready();
            ArticleState {
                article: loaded
                    .and_then(|it| it.0.as_ref())
                    .and_then(|it| it.article.clone()),
                comments: Some(
                    loaded
                        .and_then(|it| it.1.as_ref())
                        .map(|it| it.comments.clone())
                        .unwrap_or_default(),
                ),
                ..it.clone()
            }
        }
        Action::ArticlePageUnloaded => ArticleState::default(),
        // A failed comment drops the whole list.
        Action::AddComment { payload } => match payload.ready() {
            Some(envelope) => {
                let mut comments = it.comments.clone().unwrap_or_default();
                comments.extend(envelope.comment.clone());
                ArticleState {
                    comments: Some(comments),
                    comment_errors: None,
                    ..it.clone()
                }
            }
            None => ArticleState {
                comments: None,
                comment_errors: payload.errors().cloned(),
                ..it.clone()
            },
        },
        Action::DeleteComment { comment_id, .. } => {
            let Some(comments) = &it.comments else {
                return state.clone();
            };
            if !comments.iter().any(|it| it.id == *comment_id) {
                return state.clone();
            }
            ArticleState {
                comments: Some(
                    comments
                        .iter()
                        .filter(|it| it.id != *comment_id)
                        .cloned()
                        .collect(),
                ),
                ..it.clone()
            }
        }
        Action::ArticleFavorited { payload } | Action::ArticleUnfavorited { payload } => {
            let (Some(open), Some(changed)) = (
                &it.article,
                payload.ready().and_then(|it| it.article.as_ref()),
            ) else {
                return state.clone();
            };
            if open.slug != changed.slug {
                return state.clone();
            }
            ArticleState {
                article: Some(open.with_favorite_from(changed)),
                ..it.clone()
            }
        }
        Action::FollowUser { payload } | Action::UnfollowUser { payload } => {
            let (Some(open), Some(profile)) = (
                &it.article,
                payload.ready().and_then(|it| it.profile.as_ref()),
            ) else {
                return state.clone();
            };
            if open.author.username != profile.username {
                return state.clone();
            }
            let mut article = open.clone();
            article.author.following = profile.following;
            ArticleState {
                article: Some(article),
                ..it.clone()
            }
        }
        _ => return state.clone(),
    };
    Arc::new(next)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ArticleEnvelope, ArticlePagePayload, CommentEnvelope, CommentsEnvelope,
                ErrorBody, Payload, ProfileEnvelope,
                test_fixtures::{sample_article, sample_comment, sample_profile}};

    fn open_with_comments(ids: &[u64]) -> Arc<ArticleState> {
        Arc::new(ArticleState {
            article: Some(sample_article("dragons", 5)),
            comments: Some(ids.iter().map(|id| sample_comment(*id)).collect()),
            comment_errors: None,
        })
    }

    #[test]
    fn test_page_loaded() {
        let state = Arc::new(ArticleState::default());
        let next = reduce(&state, &Action::ArticlePageLoaded {
            payload: Payload::Ready(ArticlePagePayload(
                Some(ArticleEnvelope {
                    article: Some(sample_article("dragons", 5)),
                }),
                Some(CommentsEnvelope {
                    comments: vec![sample_comment(1)],
                }),
            )),
        });
        assert_eq!(next.article, Some(sample_article("dragons", 5)));
        assert_eq!(next.comments, Some(vec![sample_comment(1)]));

        // Missing comments become an empty list.
        let next = reduce(&state, &Action::ArticlePageLoaded {
            payload: Payload::Ready(ArticlePagePayload(None, None)),
        });
        assert_eq!(next.article, None);
        assert_eq!(next.comments, Some(vec![]));
    }

    #[test]
    fn test_add_comment_appends_even_to_absent_list() {
        let state = Arc::new(ArticleState {
            comment_errors: Some(Default::default()),
            ..ArticleState::default()
        });
        let next = reduce(&state, &Action::AddComment {
            payload: Payload::Ready(CommentEnvelope {
                comment: Some(sample_comment(3)),
            }),
        });
        assert_eq!(next.comments, Some(vec![sample_comment(3)]));
        assert_eq!(next.comment_errors, None);

        let next = reduce(&open_with_comments(&[1, 2]), &Action::AddComment {
            payload: Payload::Ready(CommentEnvelope {
                comment: Some(sample_comment(3)),
            }),
        });
        let ids: Vec<_> = next.comments.iter().flatten().map(|it| it.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_comment_failure_drops_the_list() {
        let body = ErrorBody::from_pairs([("body", "can't be blank")]);
        let next = reduce(&open_with_comments(&[1, 2]), &Action::AddComment {
            payload: Payload::Failed(body.clone()),
        });
        assert_eq!(next.comments, None);
        assert_eq!(next.comment_errors, body.errors);
    }

    #[test]
    fn test_delete_comment() {
        let state = open_with_comments(&[1, 2, 3]);
        let next = reduce(&state, &Action::DeleteComment {
            comment_id: 2,
            payload: Payload::Ready(()),
        });
        let ids: Vec<_> = next.comments.iter().flatten().map(|it| it.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let next = reduce(&state, &Action::DeleteComment {
            comment_id: 42,
            payload: Payload::Ready(()),
        });
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_favorite_and_follow_update_the_open_article() {
        let state = open_with_comments(&[]);
        let mut favorited = sample_article("dragons", 6);
        favorited.favorited = true;
        favorited.title = "ignored".into();

        let next = reduce(&state, &Action::ArticleFavorited {
            payload: Payload::Ready(ArticleEnvelope {
                article: Some(favorited),
            }),
        });
        let article = next.article.clone().unwrap();
        assert!(article.favorited);
        assert_eq!(article.favorites_count, 6);
        assert_eq!(article.title, sample_article("dragons", 5).title);

        let next = reduce(&next, &Action::FollowUser {
            payload: Payload::Ready(ProfileEnvelope {
                profile: Some(sample_profile("author", true)),
            }),
        });
        assert!(next.article.as_ref().unwrap().author.following);

        // Someone else's profile.
        let other = reduce(&state, &Action::FollowUser {
            payload: Payload::Ready(ProfileEnvelope {
                profile: Some(sample_profile("someone-else", true)),
            }),
        });
        assert!(Arc::ptr_eq(&state, &other));
    }

    #[test]
    fn test_page_unloaded_resets() {
        let next = reduce(&open_with_comments(&[1]), &Action::ArticlePageUnloaded);
        assert_eq!(*next, ArticleState::default());
    }
}
