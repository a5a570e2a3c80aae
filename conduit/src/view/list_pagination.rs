// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ARTICLES_PER_PAGE;

/// One link in the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// One based, what the user sees.
    pub label: String,
    /// Zero based, what [`crate::ActionCreators::set_page`] wants.
    pub page: u32,
    pub is_active: bool,
}

/// How many pages `articles_count` articles take up. A single page doesn't need a
/// pagination bar, so that is `0`.
#[must_use]
pub fn page_count(articles_count: u64) -> u32 {
    let per_page = u64::from(ARTICLES_PER_PAGE);
    if articles_count <= per_page {
        return 0;
    }
    u32::try_from(articles_count.div_ceil(per_page)).unwrap_or(u32::MAX)
}

/// The links to show, with `current_page` marked active. Empty when there is only one
/// page.
#[must_use]
pub fn page_links(articles_count: u64, current_page: u32) -> Vec<PageLink> {
    (0..page_count(articles_count))
        .map(|page| PageLink {
            label: (page + 1).to_string(),
            page,
            is_active: page == current_page,
        })
        .collect()
}
