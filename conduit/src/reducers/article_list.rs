// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, Article, ArticlesEnvelope, Pager};

/// A paged list of articles, shared by the home and profile pages. `tab` and `tag` are
/// mutually exclusive: at most one of them is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleListState {
    pub articles: Option<Vec<Arc<Article>>>,
    pub articles_count: Option<u64>,
    /// Zero based.
    pub current_page: Option<u32>,
    pub tab: Option<String>,
    pub tag: Option<String>,
    pub tags: Option<Vec<String>>,
    pub pager: Option<Pager>,
}

/// Articles and count from a page of results. A missing or failed page is empty.
fn page_of(payload: Option<&ArticlesEnvelope>) -> (Option<Vec<Arc<Article>>>, Option<u64>) {
    let page = payload.cloned().unwrap_or_default();
    (Some(page.articles), Some(page.articles_count))
}

pub fn reduce(state: &Arc<ArticleListState>, action: &Action) -> Arc<ArticleListState> {
    let it = state.as_ref();
    let next = match action {
        Action::ArticleFavorited { payload } | Action::ArticleUnfavorited { payload } => {
            let Some(changed) = payload.ready().and_then(|it| it.article.as_ref()) else {
                return state.clone();
            };
            let Some(articles) = &it.articles else {
                return state.clone();
            };
            if !articles.iter().any(|it| it.slug == changed.slug) {
                return state.clone();
            }
            // Siblings keep their identity, only the match is rebuilt.
            let articles = articles
                .iter()
                .map(|article| {
                    if article.slug == changed.slug {
                        Arc::new(article.with_favorite_from(changed))
                    } else {
                        article.clone()
                    }
                })
                .collect();
            ArticleListState {
                articles: Some(articles),
                ..it.clone()
            }
        }
        Action::SetPage { page, payload } => {
            let (articles, articles_count) = page_of(payload.ready());
            ArticleListState {
                articles,
                articles_count,
                current_page: Some(*page),
                ..it.clone()
            }
        }
        Action::ApplyTagFilter {
            tag,
            pager,
            payload,
        } => {
            let (articles, articles_count) = page_of(payload.ready());
            ArticleListState {
                articles,
                articles_count,
                current_page: Some(0),
                tab: None,
                tag: Some(tag.clone()),
                pager: Some(pager.clone()),
                ..it.clone()
            }
        }
        Action::ChangeTab {
            tab,
            pager,
            payload,
        } => {
            let (articles, articles_count) = page_of(payload.ready());
            ArticleListState {
                articles,
                articles_count,
                current_page: Some(0),
                tab: Some(tab.clone()),
                tag: None,
                pager: Some(pager.clone()),
                ..it.clone()
            }
        }
        Action::HomePageLoaded {
            tab,
            pager,
            payload,
        } => {
            let loaded = payload.ready();
            let (articles, articles_count) =
                page_of(loaded.and_then(|it| it.1.as_ref()));
            ArticleListState {
                articles,
                articles_count,
                current_page: Some(0),
                tab: Some(tab.clone()),
                tags: Some(
                    loaded
                        .and_then(|it| it.0.as_ref())
                        .map(|it| it.tags.clone())
                        .unwrap_or_default(),
                ),
                pager: Some(pager.clone()),
                ..it.clone()
            }
        }
        Action::ProfilePageLoaded { pager, payload }
        | Action::ProfileFavoritesPageLoaded { pager, payload } => {
            let (articles, articles_count) =
                page_of(payload.ready().and_then(|it| it.1.as_ref()));
            ArticleListState {
                articles,
                articles_count,
                current_page: Some(0),
                pager: Some(pager.clone()),
                ..it.clone()
            }
        }
        Action::HomePageUnloaded
        | Action::ProfilePageUnloaded
        | Action::ProfileFavoritesPageUnloaded => ArticleListState::default(),
        _ => return state.clone(),
    };
    Arc::new(next)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ArticleEnvelope, ErrorBody, HomePagePayload, Payload, ProfileEnvelope,
                ProfilePagePayload, TagsEnvelope,
                test_fixtures::{sample_article, sample_profile}};

    fn envelope(slugs: &[&str], articles_count: u64) -> ArticlesEnvelope {
        ArticlesEnvelope {
            articles: slugs
                .iter()
                .map(|slug| Arc::new(sample_article(slug, 5)))
                .collect(),
            articles_count,
        }
    }

    fn listing(slugs: &[&str]) -> Arc<ArticleListState> {
        let page = envelope(slugs, slugs.len() as u64);
        Arc::new(ArticleListState {
            articles: Some(page.articles),
            articles_count: Some(page.articles_count),
            current_page: Some(0),
            ..ArticleListState::default()
        })
    }

    fn favorite(slug: &str, favorited: bool, favorites_count: u64) -> Action {
        let mut article = sample_article(slug, favorites_count);
        article.favorited = favorited;
        article.title = "not copied".into();
        let payload = Payload::Ready(ArticleEnvelope {
            article: Some(article),
        });
        if favorited {
            Action::ArticleFavorited { payload }
        } else {
            Action::ArticleUnfavorited { payload }
        }
    }

    #[test]
    fn test_favorite_only_touches_the_matching_article() {
        let state = listing(&["a", "b", "c"]);
        let next = reduce(&state, &favorite("b", true, 6));

        let before = state.articles.as_ref().unwrap();
        let after = next.articles.as_ref().unwrap();

        assert!(after[1].favorited);
        assert_eq!(after[1].favorites_count, 6);
        assert_eq!(after[1].title, before[1].title);

        // Siblings are the very same allocations.
        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));

        // Input untouched.
        assert!(!before[1].favorited);
        assert_eq!(before[1].favorites_count, 5);
    }

    #[test]
    fn test_unfavorite_and_unknown_slug() {
        let state = listing(&["a", "b"]);
        let next = reduce(&state, &favorite("a", false, 4));
        assert_eq!(next.articles.as_ref().unwrap()[0].favorites_count, 4);

        let next = reduce(&state, &favorite("zzz", true, 1));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_set_page() {
        let state = listing(&["a"]);
        let next = reduce(&state, &Action::SetPage {
            page: 2,
            payload: Payload::Ready(envelope(&["x", "y"], 20)),
        });
        assert_eq!(next.articles_count, Some(20));
        assert_eq!(next.current_page, Some(2));
        assert_eq!(next.articles.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_tag_filter_and_tab_are_mutually_exclusive() {
        let state = Arc::new(ArticleListState {
            tab: Some("feed".into()),
            current_page: Some(3),
            ..ArticleListState::default()
        });

        let next = reduce(&state, &Action::ApplyTagFilter {
            tag: "react".into(),
            pager: Pager::Tag("react".into()),
            payload: Payload::Ready(envelope(&["r"], 5)),
        });
        assert_eq!(next.tag.as_deref(), Some("react"));
        assert_eq!(next.tab, None);
        assert_eq!(next.current_page, Some(0));
        assert_eq!(next.articles_count, Some(5));
        assert_eq!(next.pager, Some(Pager::Tag("react".into())));

        let next = reduce(&next, &Action::ChangeTab {
            tab: "all".into(),
            pager: Pager::All,
            payload: Payload::Ready(envelope(&[], 0)),
        });
        assert_eq!(next.tab.as_deref(), Some("all"));
        assert_eq!(next.tag, None);
        assert_eq!(next.current_page, Some(0));
        assert_eq!(next.articles, Some(vec![]));
    }

    #[test]
    fn test_home_page_loaded() {
        let state = Arc::new(ArticleListState::default());
        let next = reduce(&state, &Action::HomePageLoaded {
            tab: "all".into(),
            pager: Pager::All,
            payload: Payload::Ready(HomePagePayload(
                Some(TagsEnvelope {
                    tags: vec!["react".into(), "rust".into()],
                }),
                Some(envelope(&["a", "b"], 10)),
            )),
        });
        assert_eq!(next.tags, Some(vec!["react".into(), "rust".into()]));
        assert_eq!(next.articles_count, Some(10));
        assert_eq!(next.current_page, Some(0));
        assert_eq!(next.tab.as_deref(), Some("all"));
    }

    #[test]
    fn test_home_page_loaded_with_nothing_or_failure() {
        let state = Arc::new(ArticleListState::default());
        for payload in [
            Payload::Ready(HomePagePayload(None, None)),
            Payload::Failed(ErrorBody::generic("down")),
        ] {
            let next = reduce(&state, &Action::HomePageLoaded {
                tab: "all".into(),
                pager: Pager::All,
                payload,
            });
            assert_eq!(next.tags, Some(vec![]));
            assert_eq!(next.articles, Some(vec![]));
            assert_eq!(next.articles_count, Some(0));
        }
    }

    #[test]
    fn test_profile_pages_loaded() {
        let state = Arc::new(ArticleListState::default());
        let payload = Payload::Ready(ProfilePagePayload(
            Some(ProfileEnvelope {
                profile: Some(sample_profile("jake", false)),
            }),
            Some(envelope(&["a", "b", "c"], 8)),
        ));

        let next = reduce(&state, &Action::ProfilePageLoaded {
            pager: Pager::Author("jake".into()),
            payload: payload.clone(),
        });
        assert_eq!(next.articles_count, Some(8));
        assert_eq!(next.current_page, Some(0));
        assert_eq!(next.pager, Some(Pager::Author("jake".into())));

        let next = reduce(&state, &Action::ProfileFavoritesPageLoaded {
            pager: Pager::FavoritedBy("jake".into()),
            payload,
        });
        assert_eq!(next.articles.as_ref().unwrap().len(), 3);
        assert_eq!(next.pager, Some(Pager::FavoritedBy("jake".into())));
    }

    #[test]
    fn test_page_unloaded_resets() {
        for action in [
            Action::HomePageUnloaded,
            Action::ProfilePageUnloaded,
            Action::ProfileFavoritesPageUnloaded,
        ] {
            let next = reduce(&listing(&["a"]), &action);
            assert_eq!(*next, ArticleListState::default());
            assert_eq!(reduce(&next, &action), next);
        }
    }
}
