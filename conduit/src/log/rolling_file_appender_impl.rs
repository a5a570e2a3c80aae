// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::{Context, IntoDiagnostic};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::ConduitError;

/// A log file that is never rotated. The file (and its folder) are created if needed,
/// and appended to otherwise.
///
/// # Errors
///
/// Returns an error if `path_str` has no file name, or the file can't be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
        .wrap_err(ConduitError::CreateLogFile {
            path: path_str.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::try_create_temp_dir;

    #[test]
    fn test_path_without_file_name_is_an_error() {
        assert!(try_create("/").is_err());
    }

    #[test]
    fn test_file_is_created_in_new_folder() -> miette::Result<()> {
        let dir = try_create_temp_dir()?;
        let file_path = dir.join("logs").join("conduit.log");

        try_create(&file_path.to_string_lossy())?;
        assert!(file_path.exists());
        Ok(())
    }
}
