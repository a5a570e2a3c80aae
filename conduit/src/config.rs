// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          fs,
          path::PathBuf};

use dirs::config_dir;
use miette::{Context, IntoDiagnostic};

use crate::{ConduitError, StaleResultPolicy};

/// Knobs for [`crate::new_conduit_store`] and the `conduit` binary. The defaults are what
/// the binary uses when no flags are passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConduitConfig {
    /// Where the token store lives. `None` means [`try_get_config_folder_path`].
    pub storage_dir: Option<PathBuf>,
    pub stale_result_policy: StaleResultPolicy,
    /// Log to this file. `None` means logging is off.
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    ConduitTopLevelFolderName,
    TokenStoreFolder,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let path = match self {
            ConfigPaths::ConduitTopLevelFolderName => "conduit",
            ConfigPaths::TokenStoreFolder => "token_store",
        };
        write!(f, "{path}")
    }
}

/// This is where the config folder is, eg `~/.config/conduit` on Linux. Nothing is
/// created.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::ConduitTopLevelFolderName.to_string()))
}

impl ConduitConfig {
    /// The folder that the token store is opened in, created if it doesn't exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no platform config folder (and no `storage_dir`),
    /// or the folder can't be created.
    pub fn try_create_token_store_folder(&self) -> miette::Result<PathBuf> {
        let base_folder = match &self.storage_dir {
            Some(it) => it.clone(),
            None => try_get_config_folder_path().ok_or(ConduitError::AccessConfigFolder)?,
        };
        let folder = base_folder.join(ConfigPaths::TokenStoreFolder.to_string());

        fs::create_dir_all(&folder)
            .into_diagnostic()
            .wrap_err(ConduitError::CreateConfigFolder {
                path: folder.display().to_string(),
            })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "📁 Token store folder is ready", folder = ?folder);

        Ok(folder)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::try_create_temp_dir;

    #[test]
    fn test_storage_dir_overrides_config_folder() -> miette::Result<()> {
        let dir = try_create_temp_dir()?;
        let config = ConduitConfig {
            storage_dir: Some(dir.join("state")),
            ..ConduitConfig::default()
        };

        let folder = config.try_create_token_store_folder()?;
        assert_eq!(folder, dir.join("state").join("token_store"));
        assert!(folder.is_dir());

        // Already there is fine.
        config.try_create_token_store_folder()?;
        Ok(())
    }

    #[test]
    fn test_config_paths_names() {
        assert_eq!(ConfigPaths::ConduitTopLevelFolderName.to_string(), "conduit");
        assert_eq!(ConfigPaths::TokenStoreFolder.to_string(), "token_store");
        assert_eq!(format!("{:?}", ConfigPaths::TokenStoreFolder), "TokenStoreFolder");
    }

    #[test]
    fn test_config_folder_name() {
        if let Some(it) = try_get_config_folder_path() {
            assert!(it.ends_with("conduit"));
        }
    }
}
