// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::{ArticleDraft, ArticleEnvelope, ArticlesEnvelope, ClientError, CommentEnvelope,
            CommentsEnvelope, Pager, ProfileEnvelope, TagsEnvelope, UserEnvelope,
            UserUpdate};

pub type ApiResult<T> = Result<T, ClientError>;

/// Article lists are fetched this many at a time.
pub const ARTICLES_PER_PAGE: u32 = 10;

/// Offset of the first article on the zero based `page`.
#[must_use]
pub fn page_offset(page: u32) -> u32 { page.saturating_mul(ARTICLES_PER_PAGE) }

/// Every call the client makes to the remote API. Pages are zero based, and hold
/// [`ARTICLES_PER_PAGE`] articles.
///
/// Implementations hold the credential token (if any) and send it with each request.
/// They are shared between the action creators and the persistence middleware, and the
/// futures they return are run on Tokio tasks, hence `Send + Sync`.
#[async_trait]
pub trait ConduitApi: Debug + Send + Sync {
    /// Use `token` for every request from now on. `None` signs out.
    fn set_token(&self, token: Option<String>);

    async fn current_user(&self) -> ApiResult<UserEnvelope>;
    async fn login(&self, email: &str, password: &str) -> ApiResult<UserEnvelope>;
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<UserEnvelope>;
    async fn save_user(&self, update: &UserUpdate) -> ApiResult<UserEnvelope>;

    async fn articles_all(&self, page: u32) -> ApiResult<ArticlesEnvelope>;
    async fn articles_feed(&self, page: u32) -> ApiResult<ArticlesEnvelope>;
    async fn articles_by_tag(&self, tag: &str, page: u32) -> ApiResult<ArticlesEnvelope>;
    async fn articles_by_author(
        &self,
        username: &str,
        page: u32,
    ) -> ApiResult<ArticlesEnvelope>;
    async fn articles_favorited_by(
        &self,
        username: &str,
        page: u32,
    ) -> ApiResult<ArticlesEnvelope>;

    /// Fetch `page` of whichever list `pager` describes.
    async fn fetch_page(&self, pager: &Pager, page: u32) -> ApiResult<ArticlesEnvelope> {
        match pager {
            Pager::All => self.articles_all(page).await,
            Pager::Feed => self.articles_feed(page).await,
            Pager::Tag(tag) => self.articles_by_tag(tag, page).await,
            Pager::Author(username) => self.articles_by_author(username, page).await,
            Pager::FavoritedBy(username) => {
                self.articles_favorited_by(username, page).await
            }
        }
    }

    async fn get_article(&self, slug: &str) -> ApiResult<ArticleEnvelope>;
    async fn create_article(&self, draft: &ArticleDraft) -> ApiResult<ArticleEnvelope>;
    async fn update_article(
        &self,
        slug: &str,
        draft: &ArticleDraft,
    ) -> ApiResult<ArticleEnvelope>;
    async fn delete_article(&self, slug: &str) -> ApiResult<()>;
    async fn favorite(&self, slug: &str) -> ApiResult<ArticleEnvelope>;
    async fn unfavorite(&self, slug: &str) -> ApiResult<ArticleEnvelope>;

    async fn comments_for(&self, slug: &str) -> ApiResult<CommentsEnvelope>;
    async fn create_comment(&self, slug: &str, body: &str) -> ApiResult<CommentEnvelope>;
    async fn delete_comment(&self, slug: &str, comment_id: u64) -> ApiResult<()>;

    async fn tags_all(&self) -> ApiResult<TagsEnvelope>;

    async fn get_profile(&self, username: &str) -> ApiResult<ProfileEnvelope>;
    async fn follow(&self, username: &str) -> ApiResult<ProfileEnvelope>;
    async fn unfollow(&self, username: &str) -> ApiResult<ProfileEnvelope>;
}
