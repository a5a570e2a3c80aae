// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Replay a recorded session: a JSON array of [`Action`]s is dispatched, in order, to a
//! store, and the state it ends up in is returned. Pending payloads in the script settle
//! after their `delay_ms`, to whatever outcome the script says (see
//! [`crate::Payload`]), so no remote API is needed.
//!
//! ```json
//! [
//!   { "type": "UPDATE_FIELD_AUTH", "key": "email", "value": "jake@jake.jake" },
//!   { "type": "LOGIN", "payload": { "pending": { "delay_ms": 10,
//!       "settle": { "ok": { "user": { "email": "jake@jake.jake", "token": "T",
//!                                     "username": "jake" } } } } } }
//! ]
//! ```

use std::path::Path;

use miette::{Context, IntoDiagnostic};

use crate::{Action, ConduitError, ConduitStore, RootState};

/// # Errors
///
/// Returns an error if the file can't be read, or isn't a JSON array of actions.
#[tracing::instrument]
pub fn try_load_replay_script(path: &Path) -> miette::Result<Vec<Action>> {
    let path_string = path.display().to_string();

    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err(ConduitError::ReadReplayScript {
            path: path_string.clone(),
        })?;

    let actions: Vec<Action> = serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err(ConduitError::ParseReplayScript { path: path_string })?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "📜 Load replay script", action_count = %actions.len());

    Ok(actions)
}

/// Dispatch the actions one after the other, then wait for everything they started to
/// settle. Results of pending payloads are interleaved with the actions that follow
/// them, in whatever order they settle.
pub async fn replay(store: &mut ConduitStore, actions: Vec<Action>) -> RootState {
    for action in actions {
        store.dispatch_action(action).await;
    }
    store.run_until_idle().await;
    store.get_state()
}

/// # Errors
///
/// Returns an error if the state can't be serialized.
pub fn try_serialize_state(state: &RootState) -> miette::Result<String> {
    serde_json::to_string_pretty(state)
        .into_diagnostic()
        .wrap_err(ConduitError::SerializeState)
}
