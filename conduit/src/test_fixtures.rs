// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sample records, a self deleting temp dir, and [`FakeConduitApi`]. These are used by
//! the unit tests in this crate, by the integration tests in `tests/`, and by anyone
//! who wants to drive the store without a real API.

use std::{ops::Deref,
          path::{Path, PathBuf},
          sync::{Arc, Mutex, MutexGuard, PoisonError,
                 atomic::{AtomicBool, Ordering}},
          time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use miette::IntoDiagnostic;

use crate::{ApiResult, Article, ArticleDraft, ArticleEnvelope, ArticlesEnvelope,
            ClientError, Comment, CommentEnvelope, CommentsEnvelope, ConduitApi,
            ErrorBody, Profile, ProfileEnvelope, TagsEnvelope, User, UserEnvelope,
            UserUpdate, ARTICLES_PER_PAGE, page_offset};

#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a uniquely named folder under the OS temp dir. It is deleted when the
/// returned [`TempDir`] is dropped.
///
/// # Errors
///
/// Returns an error if the folder can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let new_temp_dir =
        std::env::temp_dir().join(format!("conduit-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

/// 2016-02-18T03:22:56Z, the timestamp that the RealWorld API docs use.
#[must_use]
pub fn sample_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 2, 18, 3, 22, 56)
        .single()
        .unwrap_or_default()
}

/// A logged in user, whose token is `jwt-<username>`.
#[must_use]
pub fn sample_user(username: &str) -> User {
    User {
        email: format!("{username}@example.com"),
        token: format!("jwt-{username}"),
        username: username.to_string(),
        bio: None,
        image: None,
    }
}

#[must_use]
pub fn sample_profile(username: &str, following: bool) -> Profile {
    Profile {
        username: username.to_string(),
        bio: None,
        image: None,
        following,
    }
}

/// An unfavorited article, written by `author`.
#[must_use]
pub fn sample_article(slug: &str, favorites_count: u64) -> Article {
    Article {
        slug: slug.to_string(),
        title: format!("How to train your {slug}"),
        description: "Ever wonder how?".to_string(),
        body: "You have to believe".to_string(),
        tag_list: vec!["dragons".to_string(), "training".to_string()],
        created_at: sample_timestamp(),
        updated_at: sample_timestamp(),
        favorited: false,
        favorites_count,
        author: sample_profile("author", false),
    }
}

#[must_use]
pub fn sample_comment(id: u64) -> Comment {
    Comment {
        id,
        body: format!("Comment number {id}"),
        created_at: sample_timestamp(),
        updated_at: sample_timestamp(),
        author: sample_profile("author", false),
    }
}

/// An in process stand in for the remote API. It answers every call with sample
/// records, and keeps a log of the calls it got.
///
/// - A `password` of `"wrong"` fails login with validation errors.
/// - Blank required fields fail with `"can't be blank"`, like the real API.
/// - [`FakeConduitApi::set_offline`] makes every call fail with a transport error.
/// - [`FakeConduitApi::with_delay`] makes every call take that long.
#[derive(Debug)]
pub struct FakeConduitApi {
    token: Mutex<Option<String>>,
    calls: Mutex<Vec<String>>,
    offline: AtomicBool,
    delay: Duration,
    articles_count: u64,
}

impl Default for FakeConduitApi {
    fn default() -> Self {
        Self {
            token: Mutex::default(),
            calls: Mutex::default(),
            offline: AtomicBool::new(false),
            delay: Duration::ZERO,
            articles_count: 25,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn blank(field: &str) -> ClientError {
    ClientError::validation(ErrorBody::from_pairs([(field, "can't be blank")]))
}

impl FakeConduitApi {
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_articles_count(mut self, articles_count: u64) -> Self {
        self.articles_count = articles_count;
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// The token most recently passed to [`ConduitApi::set_token`].
    pub fn token(&self) -> Option<String> { lock(&self.token).clone() }

    /// Every call so far, oldest first, eg: `"articles_by_tag rust 0"`.
    pub fn calls(&self) -> Vec<String> { lock(&self.calls).clone() }

    async fn respond<T>(
        &self,
        call: String,
        answer: impl FnOnce(&Self) -> ApiResult<T> + Send,
    ) -> ApiResult<T> {
        lock(&self.calls).push(call);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(ClientError::transport("Network error"));
        }
        answer(self)
    }

    fn page(&self, prefix: &str, page: u32) -> ArticlesEnvelope {
        let start = u64::from(page_offset(page));
        let end = (start + u64::from(ARTICLES_PER_PAGE)).min(self.articles_count);
        ArticlesEnvelope {
            articles: (start..end)
                .map(|it| Arc::new(sample_article(&format!("{prefix}-{it}"), 0)))
                .collect(),
            articles_count: self.articles_count,
        }
    }

    fn signed_in_username(&self) -> Option<String> {
        self.token()
            .and_then(|it| it.strip_prefix("jwt-").map(ToString::to_string))
    }
}

fn article_from(slug: &str, draft: &ArticleDraft) -> ApiResult<ArticleEnvelope> {
    if draft.title.is_empty() {
        return Err(blank("title"));
    }
    Ok(ArticleEnvelope {
        article: Some(Article {
            title: draft.title.clone(),
            description: draft.description.clone(),
            body: draft.body.clone(),
            tag_list: draft.tag_list.clone(),
            ..sample_article(slug, 0)
        }),
    })
}

#[async_trait]
impl ConduitApi for FakeConduitApi {
    fn set_token(&self, token: Option<String>) { *lock(&self.token) = token; }

    async fn current_user(&self) -> ApiResult<UserEnvelope> {
        self.respond("current_user".into(), |it| match it.signed_in_username() {
            Some(username) => Ok(UserEnvelope {
                user: Some(sample_user(&username)),
            }),
            None => Err(ClientError::Response {
                status: 401,
                body: ErrorBody::default(),
            }),
        })
        .await
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<UserEnvelope> {
        self.respond(format!("login {email}"), |_| {
            if password == "wrong" {
                return Err(ClientError::validation(ErrorBody::from_pairs([(
                    "email or password",
                    "is invalid",
                )])));
            }
            let username = email.split('@').next().unwrap_or_default();
            Ok(UserEnvelope {
                user: Some(sample_user(username)),
            })
        })
        .await
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<UserEnvelope> {
        self.respond(format!("register {username}"), |_| {
            let fields = [("username", username), ("email", email), ("password", password)];
            for (field, value) in fields {
                if value.is_empty() {
                    return Err(blank(field));
                }
            }
            Ok(UserEnvelope {
                user: Some(User {
                    email: email.to_string(),
                    ..sample_user(username)
                }),
            })
        })
        .await
    }

    async fn save_user(&self, update: &UserUpdate) -> ApiResult<UserEnvelope> {
        self.respond("save_user".into(), |it| {
            let mut user = sample_user(&it.signed_in_username().unwrap_or_default());
            if let Some(username) = &update.username {
                user.username.clone_from(username);
            }
            if let Some(email) = &update.email {
                user.email.clone_from(email);
            }
            if update.bio.is_some() {
                user.bio.clone_from(&update.bio);
            }
            if update.image.is_some() {
                user.image.clone_from(&update.image);
            }
            Ok(UserEnvelope { user: Some(user) })
        })
        .await
    }

    async fn articles_all(&self, page: u32) -> ApiResult<ArticlesEnvelope> {
        self.respond(format!("articles_all {page}"), |it| Ok(it.page("all", page)))
            .await
    }

    async fn articles_feed(&self, page: u32) -> ApiResult<ArticlesEnvelope> {
        self.respond(format!("articles_feed {page}"), |it| Ok(it.page("feed", page)))
            .await
    }

    async fn articles_by_tag(&self, tag: &str, page: u32) -> ApiResult<ArticlesEnvelope> {
        self.respond(format!("articles_by_tag {tag} {page}"), |it| {
            Ok(it.page(tag, page))
        })
        .await
    }

    async fn articles_by_author(
        &self,
        username: &str,
        page: u32,
    ) -> ApiResult<ArticlesEnvelope> {
        self.respond(format!("articles_by_author {username} {page}"), |it| {
            Ok(it.page(username, page))
        })
        .await
    }

    async fn articles_favorited_by(
        &self,
        username: &str,
        page: u32,
    ) -> ApiResult<ArticlesEnvelope> {
        self.respond(format!("articles_favorited_by {username} {page}"), |it| {
            Ok(it.page(username, page))
        })
        .await
    }

    async fn get_article(&self, slug: &str) -> ApiResult<ArticleEnvelope> {
        self.respond(format!("get_article {slug}"), |_| {
            Ok(ArticleEnvelope {
                article: Some(sample_article(slug, 0)),
            })
        })
        .await
    }

    async fn create_article(&self, draft: &ArticleDraft) -> ApiResult<ArticleEnvelope> {
        let slug = draft.title.to_lowercase().replace(' ', "-");
        self.respond("create_article".into(), |_| article_from(&slug, draft))
            .await
    }

    async fn update_article(
        &self,
        slug: &str,
        draft: &ArticleDraft,
    ) -> ApiResult<ArticleEnvelope> {
        self.respond(format!("update_article {slug}"), |_| article_from(slug, draft))
            .await
    }

    async fn delete_article(&self, slug: &str) -> ApiResult<()> {
        self.respond(format!("delete_article {slug}"), |_| Ok(())).await
    }

    async fn favorite(&self, slug: &str) -> ApiResult<ArticleEnvelope> {
        self.respond(format!("favorite {slug}"), |_| {
            Ok(ArticleEnvelope {
                article: Some(Article {
                    favorited: true,
                    ..sample_article(slug, 1)
                }),
            })
        })
        .await
    }

    async fn unfavorite(&self, slug: &str) -> ApiResult<ArticleEnvelope> {
        self.respond(format!("unfavorite {slug}"), |_| {
            Ok(ArticleEnvelope {
                article: Some(sample_article(slug, 0)),
            })
        })
        .await
    }

    async fn comments_for(&self, slug: &str) -> ApiResult<CommentsEnvelope> {
        self.respond(format!("comments_for {slug}"), |_| {
            Ok(CommentsEnvelope {
                comments: vec![sample_comment(1), sample_comment(2)],
            })
        })
        .await
    }

    async fn create_comment(&self, slug: &str, body: &str) -> ApiResult<CommentEnvelope> {
        self.respond(format!("create_comment {slug}"), |_| {
            if body.is_empty() {
                return Err(blank("body"));
            }
            Ok(CommentEnvelope {
                comment: Some(Comment {
                    body: body.to_string(),
                    ..sample_comment(3)
                }),
            })
        })
        .await
    }

    async fn delete_comment(&self, slug: &str, comment_id: u64) -> ApiResult<()> {
        self.respond(format!("delete_comment {slug} {comment_id}"), |_| Ok(()))
            .await
    }

    async fn tags_all(&self) -> ApiResult<TagsEnvelope> {
        self.respond("tags_all".into(), |_| {
            Ok(TagsEnvelope {
                tags: vec!["dragons".into(), "training".into()],
            })
        })
        .await
    }

    async fn get_profile(&self, username: &str) -> ApiResult<ProfileEnvelope> {
        self.respond(format!("get_profile {username}"), |_| {
            Ok(ProfileEnvelope {
                profile: Some(sample_profile(username, false)),
            })
        })
        .await
    }

    async fn follow(&self, username: &str) -> ApiResult<ProfileEnvelope> {
        self.respond(format!("follow {username}"), |_| {
            Ok(ProfileEnvelope {
                profile: Some(sample_profile(username, true)),
            })
        })
        .await
    }

    async fn unfollow(&self, username: &str) -> ApiResult<ProfileEnvelope> {
        self.respond(format!("unfollow {username}"), |_| {
            Ok(ProfileEnvelope {
                profile: Some(sample_profile(username, false)),
            })
        })
        .await
    }
}
