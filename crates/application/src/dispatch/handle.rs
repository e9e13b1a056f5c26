//! Detached dispatch handle.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use console_domain::ApiResponse;
use tokio::sync::oneshot;

use crate::error::{DispatchError, DispatchResult};

/// Outcome of a request running on the runtime.
///
/// The request keeps running to completion when the handle is dropped;
/// dropping only discards the outcome. The handle yields exactly one result.
#[derive(Debug)]
pub struct DispatchHandle {
    receiver: oneshot::Receiver<DispatchResult<ApiResponse>>,
}

impl DispatchHandle {
    /// Spawns `exchange` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub(crate) fn spawn<F>(exchange: F) -> Self
    where
        F: Future<Output = DispatchResult<ApiResponse>> + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = exchange.await;
            // The caller may have dropped the handle; the outcome is then discarded.
            let _ = sender.send(outcome);
        });
        Self { receiver }
    }
}

impl Future for DispatchHandle {
    type Output = DispatchResult<ApiResponse>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(DispatchError::Network {
                    message: "dispatch task ended before settling".to_string(),
                })
            })
        })
    }
}
