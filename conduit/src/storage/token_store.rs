// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

/// Key that the credential token is stored under.
pub const JWT_KEY: &str = "jwt";

/// A string key / value store that survives restarts. Think browser local storage.
///
/// Implementations must be safe to share between the store's middleware and the action
/// creators, hence the `Send + Sync` bound.
pub trait TokenStore: Debug + Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the value could not be written.
    fn set_item(&self, key: &str, value: &str) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the store could not be read. A missing key is `Ok(None)`.
    fn get_item(&self, key: &str) -> miette::Result<Option<String>>;

    /// Removing a key that isn't there is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store could not be written.
    fn remove_item(&self, key: &str) -> miette::Result<()>;
}
