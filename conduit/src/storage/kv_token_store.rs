// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`TokenStore`] that lives on disk, in a [kv] store. Values are saved as [Json].
//!
//! The [kv] crate is a thin layer over [sled](https://github.com/spacejam/sled). A
//! folder can only be opened by one [`kv::Store`] at a time, so keep one
//! [`KvTokenStore`] around for the life of the process.

use std::{fmt::{Debug, Display, Formatter},
          path::Path};

use kv::{Config, Json, Store};
use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use crate::TokenStore;

/// A [`kv::Bucket`] whose values are serialized to [Json].
pub type KvBucket<'a, KeyT, ValueT> = kv::Bucket<'a, KeyT, Json<ValueT>>;

/// Bucket that [`KvTokenStore`] keeps its items in.
pub const TOKEN_BUCKET_NAME: &str = "conduit";

pub struct KvTokenStore {
    store: Store,
    db_folder_path: String,
}

impl Debug for KvTokenStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvTokenStore")
            .field("db_folder_path", &self.db_folder_path)
            .finish_non_exhaustive()
    }
}

impl KvTokenStore {
    /// Open the store in `db_folder`, creating the folder if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder can't be created, or is already open.
    pub fn try_open(db_folder: impl AsRef<Path>) -> miette::Result<Self> {
        let db_folder_path = db_folder.as_ref().to_string_lossy().to_string();
        let store = load_or_create_store(&db_folder_path)?;
        Ok(Self {
            store,
            db_folder_path,
        })
    }

    fn bucket(&self) -> miette::Result<KvBucket<'static, String, String>> {
        load_or_create_bucket_from_store(&self.store, TOKEN_BUCKET_NAME)
    }
}

impl TokenStore for KvTokenStore {
    fn set_item(&self, key: &str, value: &str) -> miette::Result<()> {
        insert_into_bucket(&self.bucket()?, key.to_string(), value.to_string())
    }

    fn get_item(&self, key: &str) -> miette::Result<Option<String>> {
        get_from_bucket(&self.bucket()?, key.to_string())
    }

    fn remove_item(&self, key: &str) -> miette::Result<()> {
        remove_from_bucket(&self.bucket()?, key.to_string())?;
        Ok(())
    }
}

/// Create the db folder if it doesn't exist. Otherwise load it from disk.
///
/// # Errors
///
/// Returns an error if the folder can't be created, or the store is locked by another
/// [`kv::Store`].
#[tracing::instrument]
pub fn load_or_create_store(db_folder_path: &str) -> miette::Result<Store> {
    let store = Store::new(Config::new(db_folder_path))
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::CreateDbFolder {
            db_folder_path: db_folder_path.to_string(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📑 Load or create a store",
        db_folder_path = %db_folder_path
    );

    Ok(store)
}

/// # Errors
///
/// Returns an error if the bucket can't be created in `store`.
#[tracing::instrument(skip(store))]
pub fn load_or_create_bucket_from_store<
    'a,
    KeyT: for<'k> kv::Key<'k>,
    ValueT: Serialize + for<'d> Deserialize<'d>,
>(
    store: &Store,
    bucket_name: &str,
) -> miette::Result<KvBucket<'a, KeyT, ValueT>> {
    let bucket: KvBucket<'_, KeyT, ValueT> = store
        .bucket(Some(bucket_name))
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::CreateBucketFromStore {
            bucket_name: bucket_name.to_string(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📦 Load or create bucket from store",
        bucket_name = %bucket_name
    );

    Ok(bucket)
}

/// # Errors
///
/// Returns an error if the value can't be serialized, or saved.
#[tracing::instrument(skip(bucket, value))]
pub fn insert_into_bucket<
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Serialize + for<'d> Deserialize<'d>,
>(
    bucket: &KvBucket<'_, KeyT, ValueT>,
    key: KeyT,
    value: ValueT,
) -> miette::Result<()> {
    bucket
        .set(&key, &Json(value))
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::SaveKeyValuePairToBucket)?;

    // Values are credentials, so they are never logged.
    tracing::debug!(message = "🔽 Save key / value pair to bucket", key = %key);

    Ok(())
}

/// # Errors
///
/// Returns an error if the value can't be loaded, or deserialized.
#[tracing::instrument(skip(bucket))]
pub fn get_from_bucket<
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Serialize + for<'d> Deserialize<'d>,
>(
    bucket: &KvBucket<'_, KeyT, ValueT>,
    key: KeyT,
) -> miette::Result<Option<ValueT>> {
    let maybe_value: Option<Json<ValueT>> = bucket
        .get(&key)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::LoadKeyValuePairFromBucket)?;

    let it = maybe_value.map(|Json(value)| value);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔼 Load key / value pair from bucket",
        key = %key,
        found = %it.is_some()
    );

    Ok(it)
}

/// # Errors
///
/// Returns an error if the removal fails.
#[tracing::instrument(skip(bucket))]
pub fn remove_from_bucket<
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Serialize + for<'d> Deserialize<'d>,
>(
    bucket: &KvBucket<'_, KeyT, ValueT>,
    key: KeyT,
) -> miette::Result<Option<ValueT>> {
    let maybe_value: Option<Json<ValueT>> = bucket
        .remove(&key)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::RemoveKeyValuePairFromBucket)?;

    let it = maybe_value.map(|Json(value)| value);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "❌ Delete key / value pair from bucket",
        key = %key,
        found = %it.is_some()
    );

    Ok(it)
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum KvErrorCouldNot {
    #[error("📑 Could not create db folder: '{db_folder_path}' on disk")]
    CreateDbFolder { db_folder_path: String },

    #[error("📦 Could not create bucket from store: '{bucket_name}'")]
    CreateBucketFromStore { bucket_name: String },

    #[error("🔽 Could not save key/value pair to bucket")]
    SaveKeyValuePairToBucket,

    #[error("🔼 Could not load key/value pair from bucket")]
    LoadKeyValuePairFromBucket,

    #[error("❌ Could not remove key/value pair from bucket")]
    RemoveKeyValuePairFromBucket,
}
