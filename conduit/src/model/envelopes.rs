// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Success envelopes returned by the remote API, and the combined payloads of the page
//! loaded actions (which fetch more than one thing at once).
//!
//! Every field is optional or defaults to empty, since the reducers treat absent data
//! as "no data" and never as an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Article, Comment, Profile, User};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserEnvelope {
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileEnvelope {
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleEnvelope {
    pub article: Option<Article>,
}

/// One page of articles, and how many there are in total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticlesEnvelope {
    pub articles: Vec<Arc<Article>>,
    pub articles_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsEnvelope {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentEnvelope {
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsEnvelope {
    pub comments: Vec<Comment>,
}

/// Tags and the first page of articles. Serialized as a two element array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePagePayload(pub Option<TagsEnvelope>, pub Option<ArticlesEnvelope>);

/// The article, and its comments. Serialized as a two element array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePagePayload(pub Option<ArticleEnvelope>, pub Option<CommentsEnvelope>);

/// The profile, and the first page of its articles. Serialized as a two element array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePagePayload(pub Option<ProfileEnvelope>, pub Option<ArticlesEnvelope>);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_articles_envelope_uses_camel_case() {
        let json = r#"{ "articles": [{ "slug": "a", "favoritesCount": 3 }], "articlesCount": 1 }"#;
        let it: ArticlesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(it.articles_count, 1);
        assert_eq!(it.articles[0].slug, "a");
        assert_eq!(it.articles[0].favorites_count, 3);
        assert!(!it.articles[0].favorited);
    }

    #[test]
    fn test_home_page_payload_is_a_pair_with_holes() {
        let json = r#"[null, { "articles": [], "articlesCount": 5 }]"#;
        let it: HomePagePayload = serde_json::from_str(json).unwrap();
        assert_eq!(it.0, None);
        assert_eq!(it.1.map(|it| it.articles_count), Some(5));
    }

    #[test]
    fn test_user_envelope_without_user() {
        let it: UserEnvelope = serde_json::from_str(r#"{ "data": "test" }"#).unwrap();
        assert_eq!(it.user, None);
    }
}
