// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ordermap::OrderMap;
use serde::{Deserialize, Serialize};

/// Field name to messages, in the order the API reported them. For example
/// `{ "email": ["is invalid"], "password": ["is too short", "is required"] }`.
pub type ValidationErrors = OrderMap<String, Vec<String>>;

/// Key used for errors that are not about a particular field.
pub const GENERIC_ERROR_KEY: &str = "error";

/// The error-shaped payload of a failed action. This is what ends up in a slice's
/// `errors` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub errors: Option<ValidationErrors>,
}

impl ErrorBody {
    /// `{ "errors": { "error": [message] } }`, used when a failure has no structured
    /// validation errors.
    pub fn generic(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.insert(GENERIC_ERROR_KEY.to_string(), vec![message.into()]);
        Self {
            errors: Some(errors),
        }
    }

    /// Build one from `(field, message)` pairs. Messages for the same field are grouped
    /// in order.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, message) in pairs {
            errors
                .entry(field.to_string())
                .or_default()
                .push(message.to_string());
        }
        Self {
            errors: Some(errors),
        }
    }
}
