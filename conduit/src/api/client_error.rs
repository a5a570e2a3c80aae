// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::ErrorBody;

/// How a call to the remote API can fail. A [`crate::PendingValue`] settles to one of
/// these on failure.
#[derive(thiserror::Error, miette::Diagnostic, Debug, Clone, PartialEq, Eq, Serialize,
         Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientError {
    /// The API answered, with an error status. The body usually has validation errors.
    #[error("🌐 API responded with status {status}")]
    Response { status: u16, body: ErrorBody },

    /// The API could not be reached, or answered with something unreadable.
    #[error("🔌 Could not reach the API: {message}")]
    Transport { message: String },
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// A 422, which is what the API uses for validation errors.
    pub fn validation(body: ErrorBody) -> Self { Self::Response { status: 422, body } }
}

/// Prefer the structured validation errors that came back with the response. Anything
/// else becomes [`ErrorBody::generic`], with this error's message.
impl From<ClientError> for ErrorBody {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Response {
                body: body @ ErrorBody { errors: Some(_) },
                ..
            } => body,
            ClientError::Transport { message } => ErrorBody::generic(message),
            other @ ClientError::Response { .. } => ErrorBody::generic(other.to_string()),
        }
    }
}
