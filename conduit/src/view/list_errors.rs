// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ValidationErrors;

/// One line per message, `"<field> <message>"`, fields and messages in the order the
/// API reported them. Nothing to show is an empty list.
#[must_use]
pub fn error_lines(maybe_errors: Option<&ValidationErrors>) -> Vec<String> {
    let Some(errors) = maybe_errors else {
        return vec![];
    };
    errors
        .iter()
        .flat_map(|(field, messages)| {
            messages.iter().map(move |message| format!("{field} {message}"))
        })
        .collect()
}
