// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Action, Profile};

/// The profile being viewed. It is always replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileState {
    pub profile: Option<Profile>,
}

pub fn reduce(state: &Arc<ProfileState>, action: &Action) -> Arc<ProfileState> {
    match action {
        Action::ProfilePageLoaded { payload, .. }
        | Action::ProfileFavoritesPageLoaded { payload, .. } => Arc::new(ProfileState {
            profile: payload
                .ready()
                .and_then(|it| it.0.as_ref())
                .and_then(|it| it.profile.clone()),
        }),
        // A failed follow leaves the profile as it was.
        Action::FollowUser { payload } | Action::UnfollowUser { payload } => {
            match payload.ready().and_then(|it| it.profile.clone()) {
                Some(profile) => Arc::new(ProfileState {
                    profile: Some(profile),
                }),
                None => state.clone(),
            }
        }
        Action::ProfilePageUnloaded | Action::ProfileFavoritesPageUnloaded => {
            Arc::new(ProfileState::default())
        }
        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorBody, Pager, Payload, ProfileEnvelope, ProfilePagePayload,
                test_fixtures::sample_profile};

    fn follow(profile: Profile) -> Action {
        Action::FollowUser {
            payload: Payload::Ready(ProfileEnvelope {
                profile: Some(profile),
            }),
        }
    }

    #[test]
    fn test_loaded_then_followed_replaces_wholesale() {
        let state = Arc::new(ProfileState::default());
        let mut jake = sample_profile("jake", false);
        jake.bio = Some("I work at statefarm".into());

        let next = reduce(&state, &Action::ProfilePageLoaded {
            pager: Pager::Author("jake".into()),
            payload: Payload::Ready(ProfilePagePayload(
                Some(ProfileEnvelope {
                    profile: Some(jake),
                }),
                None,
            )),
        });
        assert_eq!(
            next.profile.as_ref().unwrap().bio.as_deref(),
            Some("I work at statefarm")
        );

        // The follow response has no bio, and none is kept.
        let next = reduce(&next, &follow(sample_profile("jake", true)));
        assert_eq!(next.profile, Some(sample_profile("jake", true)));

        let next = reduce(&next, &Action::UnfollowUser {
            payload: Payload::Ready(ProfileEnvelope {
                profile: Some(sample_profile("jake", false)),
            }),
        });
        assert_eq!(next.profile, Some(sample_profile("jake", false)));
    }

    #[test]
    fn test_failed_follow_keeps_state() {
        let state = Arc::new(ProfileState {
            profile: Some(sample_profile("jake", false)),
        });
        let next = reduce(&state, &Action::FollowUser {
            payload: Payload::Failed(ErrorBody::generic("401")),
        });
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_unloaded_resets() {
        let state = Arc::new(ProfileState {
            profile: Some(sample_profile("jake", false)),
        });
        for action in [Action::ProfilePageUnloaded, Action::ProfileFavoritesPageUnloaded] {
            assert_eq!(*reduce(&state, &action), ProfileState::default());
        }
    }
}
