// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          future::Future,
          time::Duration};

use futures::{FutureExt,
              future::{BoxFuture, Shared}};
use serde::{Deserialize, Deserializer};

use crate::{ClientError, ErrorBody, ValidationErrors};

/// The future behind a [`PendingValue`].
pub type SettleFuture<T> = BoxFuture<'static, Result<T, ClientError>>;

/// An async computation that settles exactly once, to a value or a [`ClientError`].
///
/// It is cheap to clone, and every clone observes the same settlement. The work does not
/// start until something awaits it (which is the promise middleware). Two
/// [`PendingValue`]s are equal only if they are clones of each other.
pub struct PendingValue<T> {
    inner: Shared<SettleFuture<T>>,
}

impl<T> Clone for PendingValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Debug for PendingValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = match self.inner.peek() {
            None => "pending",
            Some(Ok(_)) => "resolved",
            Some(Err(_)) => "rejected",
        };
        f.debug_struct("PendingValue").field("state", &state).finish()
    }
}

impl<T> PartialEq for PendingValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn eq(&self, other: &Self) -> bool { Shared::ptr_eq(&self.inner, &other.inner) }
}

impl<T> PendingValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(future: impl Future<Output = Result<T, ClientError>> + Send + 'static) -> Self {
        Self {
            inner: future.boxed().shared(),
        }
    }

    pub fn resolved(value: T) -> Self { Self::new(futures::future::ready(Ok(value))) }

    pub fn rejected(error: ClientError) -> Self {
        Self::new(futures::future::ready(Err(error)))
    }

    /// Settles after `delay`. Used to stand in for a slow API call.
    pub fn delayed(delay: Duration, result: Result<T, ClientError>) -> Self {
        Self::new(async move {
            tokio::time::sleep(delay).await;
            result
        })
    }

    /// Wait for the value to settle, and turn the outcome into a payload. A failure
    /// becomes [`Payload::Failed`] with the error's [`ErrorBody`].
    pub async fn settle(self) -> Payload<T> {
        match self.inner.await {
            Ok(value) => Payload::Ready(value),
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "💥 Pending value rejected", error = %error);
                Payload::Failed(ErrorBody::from(error))
            }
        }
    }
}

/// The payload of an action whose data comes from the remote API.
///
/// A failed payload is always error-shaped, so an action can't claim to be an error and
/// carry a success value at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Not settled yet. Only the promise middleware sees these, reducers never do.
    Pending(PendingValue<T>),
    Ready(T),
    Failed(ErrorBody),
}

impl<T> Payload<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn pending(future: impl Future<Output = Result<T, ClientError>> + Send + 'static) -> Self {
        Payload::Pending(PendingValue::new(future))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool { matches!(self, Payload::Pending(_)) }

    #[must_use]
    pub fn is_failed(&self) -> bool { matches!(self, Payload::Failed(_)) }

    /// The success value, if there is one.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Payload::Ready(it) => Some(it),
            _ => None,
        }
    }

    /// The validation errors of a failed payload. `None` for anything else, or if the
    /// failure didn't have any.
    #[must_use]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Payload::Failed(body) => body.errors.as_ref(),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ErrorBody>> for Payload<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(result: Result<T, ErrorBody>) -> Self {
        match result {
            Ok(it) => Payload::Ready(it),
            Err(body) => Payload::Failed(body),
        }
    }
}

/// How a [`Payload`] is written in JSON (in replay scripts for example).
///
/// ```json
/// { "ready": { "user": { "token": "T" } } }
/// { "failed": { "errors": { "email": ["is invalid"] } } }
/// { "pending": { "delay_ms": 50, "settle": { "ok": { "user": null } } } }
/// { "pending": { "delay_ms": 50, "settle": { "err": { "transport": { "message": "down" } } } } }
/// ```
///
/// A pending payload deserializes into a [`PendingValue::delayed`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PayloadRepr<T> {
    Ready(T),
    Failed(ErrorBody),
    Pending {
        #[serde(default)]
        delay_ms: u64,
        settle: SettleRepr<T>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SettleRepr<T> {
    Ok(T),
    Err(ClientError),
}

impl<'de, T> Deserialize<'de> for Payload<T>
where
    T: Deserialize<'de> + Clone + Send + Sync + 'static,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match PayloadRepr::<T>::deserialize(deserializer)? {
            PayloadRepr::Ready(it) => Payload::Ready(it),
            PayloadRepr::Failed(body) => Payload::Failed(body),
            PayloadRepr::Pending { delay_ms, settle } => {
                let result = match settle {
                    SettleRepr::Ok(it) => Ok(it),
                    SettleRepr::Err(error) => Err(error),
                };
                Payload::Pending(PendingValue::delayed(
                    Duration::from_millis(delay_ms),
                    result,
                ))
            }
        })
    }
}
