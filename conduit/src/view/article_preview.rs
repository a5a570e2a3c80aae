// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{ActionType, Article};

/// Shown for users who haven't set an image.
pub const DEFAULT_AVATAR_URL: &str = "https://static.productionready.io/images/smiley-cyrus.jpg";

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_ARTICLES_MESSAGE: &str = "No articles are here... yet.";

#[must_use]
pub fn avatar_url(maybe_image: Option<&str>) -> &str {
    match maybe_image {
        Some(image) if !image.is_empty() => image,
        _ => DEFAULT_AVATAR_URL,
    }
}

/// Filled when favorited, outlined otherwise.
#[must_use]
pub fn favorite_button_class(favorited: bool) -> &'static str {
    if favorited {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-outline-primary"
    }
}

/// Which action clicking the favorite button dispatches. See
/// [`crate::ActionCreators::toggle_favorite`].
#[must_use]
pub fn favorite_button_action(favorited: bool) -> ActionType {
    if favorited {
        ActionType::ArticleUnfavorited
    } else {
        ActionType::ArticleFavorited
    }
}

/// Eg: `Mon Jan 15 2024`.
#[must_use]
pub fn format_article_date(date: &DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[must_use]
pub fn article_href(slug: &str) -> String { format!("/article/{slug}") }

#[must_use]
pub fn profile_href(username: &str) -> String { format!("/@{username}") }

#[must_use]
pub fn profile_favorites_href(username: &str) -> String {
    format!("/@{username}/favorites")
}

/// What an article list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleListView<'a> {
    /// Nothing has been fetched yet.
    Loading,
    Empty,
    Articles(&'a [Arc<Article>]),
}

impl ArticleListView<'_> {
    /// The placeholder text, if there are no articles to show.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ArticleListView::Loading => Some(LOADING_MESSAGE),
            ArticleListView::Empty => Some(NO_ARTICLES_MESSAGE),
            ArticleListView::Articles(_) => None,
        }
    }
}

#[must_use]
pub fn article_list_view(maybe_articles: Option<&[Arc<Article>]>) -> ArticleListView<'_> {
    match maybe_articles {
        None => ArticleListView::Loading,
        Some([]) => ArticleListView::Empty,
        Some(articles) => ArticleListView::Articles(articles),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{sample_article, sample_timestamp};

    #[test]
    fn test_avatar_falls_back_to_default() {
        assert_eq!(avatar_url(None), DEFAULT_AVATAR_URL);
        assert_eq!(avatar_url(Some("")), DEFAULT_AVATAR_URL);
        assert_eq!(
            avatar_url(Some("https://example.com/avatar.jpg")),
            "https://example.com/avatar.jpg"
        );
    }

    #[test]
    fn test_favorite_button() {
        assert_eq!(favorite_button_class(false), "btn btn-sm btn-outline-primary");
        assert_eq!(favorite_button_class(true), "btn btn-sm btn-primary");
        assert_eq!(favorite_button_action(false), ActionType::ArticleFavorited);
        assert_eq!(favorite_button_action(true), ActionType::ArticleUnfavorited);
    }

    #[test]
    fn test_format_article_date() {
        assert_eq!(format_article_date(&sample_timestamp()), "Thu Feb 18 2016");
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(article_href("test-article"), "/article/test-article");
        assert_eq!(profile_href("testuser"), "/@testuser");
        assert_eq!(profile_favorites_href("testuser"), "/@testuser/favorites");
    }

    #[test]
    fn test_article_list_view() {
        assert_eq!(article_list_view(None).message(), Some("Loading..."));
        assert_eq!(
            article_list_view(Some(&[][..])).message(),
            Some("No articles are here... yet.")
        );

        let articles = vec![Arc::new(sample_article("a", 0))];
        assert_eq!(
            article_list_view(Some(articles.as_slice())),
            ArticleListView::Articles(articles.as_slice())
        );
        assert_eq!(article_list_view(Some(articles.as_slice())).message(), None);
    }
}
