// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, ActionType, ArticleDraft, EditorField, ValidationErrors};

/// The article editor. `article_slug` is set when an existing article is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorState {
    pub article_slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_input: Option<String>,
    pub tag_list: Vec<String>,
    pub in_progress: bool,
    pub errors: Option<ValidationErrors>,
}

impl EditorState {
    /// What gets submitted.
    #[must_use]
    pub fn draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            body: self.body.clone().unwrap_or_default(),
            tag_list: self.tag_list.clone(),
        }
    }
}

pub fn reduce(state: &Arc<EditorState>, action: &Action) -> Arc<EditorState> {
    let it = state.as_ref();
    let next = match action {
        Action::EditorPageLoaded { payload } => {
            let article = payload
                .ready()
                .and_then(Option::as_ref)
                .and_then(|it| it.article.as_ref());
            EditorState {
                article_slug: Some(article.map(|it| it.slug.clone()).unwrap_or_default()),
                title: Some(article.map(|it| it.title.clone()).unwrap_or_default()),
                description: Some(
                    article.map(|it| it.description.clone()).unwrap_or_default(),
                ),
                body: Some(article.map(|it| it.body.clone()).unwrap_or_default()),
                tag_input: Some(String::new()),
                tag_list: article.map(|it| it.tag_list.clone()).unwrap_or_default(),
                ..it.clone()
            }
        }
        Action::EditorPageUnloaded => EditorState::default(),
        Action::ArticleSubmitted { payload } => EditorState {
            in_progress: false,
            errors: payload.errors().cloned(),
            ..it.clone()
        },
        Action::AsyncStart {
            subtype: ActionType::ArticleSubmitted,
        } => EditorState {
            in_progress: true,
            ..it.clone()
        },
        Action::AddTag => {
            let mut tag_list = it.tag_list.clone();
            tag_list.push(it.tag_input.clone().unwrap_or_default());
            EditorState {
                tag_list,
                tag_input: Some(String::new()),
                ..it.clone()
            }
        }
        Action::RemoveTag { tag } => {
            if !it.tag_list.contains(tag) {
                return state.clone();
            }
            EditorState {
                tag_list: it
                    .tag_list
                    .iter()
                    .filter(|it| *it != tag)
                    .cloned()
                    .collect(),
                ..it.clone()
            }
        }
        Action::UpdateFieldEditor { key, value } => {
            let mut next = it.clone();
            let field = match key {
                EditorField::Title => &mut next.title,
                EditorField::Description => &mut next.description,
                EditorField::Body => &mut next.body,
                EditorField::TagInput => &mut next.tag_input,
            };
            *field = Some(value.clone());
            next
        }
        _ => return state.clone(),
    };
    Arc::new(next)
}
