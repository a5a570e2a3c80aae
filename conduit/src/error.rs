// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Infrastructure errors: config folder, token storage, replay scripts, logging. These
//! are only ever returned from setup code. Errors that come back from the remote API
//! are [`crate::ClientError`]s, and those never leave the dispatch path.
//!
//! They are meant to be used with [`miette::WrapErr::wrap_err`], so the underlying cause
//! is kept in the report.

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum ConduitError {
    #[error("📁 Could not access the config folder")]
    #[diagnostic(help("Pass --storage-dir to pick a folder explicitly"))]
    AccessConfigFolder,

    #[error("📁 Could not create config folder: '{path}'")]
    CreateConfigFolder { path: String },

    #[error("📑 Could not open token store: '{path}'")]
    OpenTokenStore { path: String },

    #[error("📜 Could not read replay script: '{path}'")]
    ReadReplayScript { path: String },

    #[error("📜 Could not parse replay script: '{path}'")]
    #[diagnostic(help("The script must be a JSON array of actions, each with a `type`"))]
    ParseReplayScript { path: String },

    #[error("🖨️ Could not serialize state")]
    SerializeState,

    #[error("📝 Could not create log file: '{path}'")]
    CreateLogFile { path: String },

    #[error("📝 Could not initialize logging")]
    InitializeLogging,
}
