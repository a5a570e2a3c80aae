// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{avatar_url, profile_href};
use crate::User;

/// One link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Only the signed in user's own link has one.
    pub maybe_image: Option<String>,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            maybe_image: None,
        }
    }
}

/// The brand shown at the left of the navigation bar. It links to `/`.
#[must_use]
pub fn app_name_label(app_name: &str) -> String { app_name.to_lowercase() }

/// Signed out users get home, sign in, and sign up. Signed in users get home, new
/// post, settings, and a link to their own profile.
#[must_use]
pub fn header_links(maybe_current_user: Option<&User>) -> Vec<NavLink> {
    match maybe_current_user {
        None => vec![
            NavLink::new("Home", "/"),
            NavLink::new("Sign in", "/login"),
            NavLink::new("Sign up", "/register"),
        ],
        Some(user) => vec![
            NavLink::new("Home", "/"),
            NavLink::new("New Post", "/editor"),
            NavLink::new("Settings", "/settings"),
            NavLink {
                maybe_image: Some(avatar_url(user.image.as_deref()).to_string()),
                ..NavLink::new(&user.username, &profile_href(&user.username))
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{DEFAULT_APP_NAME, test_fixtures::sample_user, view::DEFAULT_AVATAR_URL};

    fn labels_and_hrefs(links: &[NavLink]) -> Vec<(&str, &str)> {
        links
            .iter()
            .map(|it| (it.label.as_str(), it.href.as_str()))
            .collect()
    }

    #[test]
    fn test_app_name_is_lowercase() {
        assert_eq!(app_name_label(DEFAULT_APP_NAME), "conduit");
    }

    #[test]
    fn test_signed_out() {
        assert_eq!(labels_and_hrefs(&header_links(None)), vec![
            ("Home", "/"),
            ("Sign in", "/login"),
            ("Sign up", "/register"),
        ]);
    }

    #[test]
    fn test_signed_in() {
        let mut user = sample_user("testuser");
        let links = header_links(Some(&user));
        assert_eq!(labels_and_hrefs(&links), vec![
            ("Home", "/"),
            ("New Post", "/editor"),
            ("Settings", "/settings"),
            ("testuser", "/@testuser"),
        ]);
        assert_eq!(links[3].maybe_image.as_deref(), Some(DEFAULT_AVATAR_URL));

        user.image = Some("https://example.com/avatar.jpg".into());
        let links = header_links(Some(&user));
        assert_eq!(
            links[3].maybe_image.as_deref(),
            Some("https://example.com/avatar.jpg")
        );
    }
}
