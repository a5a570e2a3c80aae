// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap,
          sync::{Mutex, PoisonError,
                 atomic::{AtomicUsize, Ordering}}};

use crate::TokenStore;

/// A [`TokenStore`] that forgets everything when dropped. Used for ephemeral sessions,
/// and in tests, where the write and delete counters are handy.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    items: Mutex<HashMap<String, String>>,
    write_count: AtomicUsize,
    delete_count: AtomicUsize,
}

impl InMemoryTokenStore {
    /// Start out holding `key` → `value`. This doesn't count as a write.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let it = Self::default();
        it.lock().insert(key.to_string(), value.to_string());
        it
    }

    /// Number of calls to [`TokenStore::set_item`].
    pub fn write_count(&self) -> usize { self.write_count.load(Ordering::SeqCst) }

    /// Number of calls to [`TokenStore::remove_item`].
    pub fn delete_count(&self) -> usize { self.delete_count.load(Ordering::SeqCst) }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // The map is always left consistent, so a poisoned lock is still usable.
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for InMemoryTokenStore {
    fn set_item(&self, key: &str, value: &str) -> miette::Result<()> {
        self.write_count.fetch_add(1, Ordering::SeqCst);
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> miette::Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn remove_item(&self, key: &str) -> miette::Result<()> {
        self.delete_count.fetch_add(1, Ordering::SeqCst);
        self.lock().remove(key);
        Ok(())
    }
}
