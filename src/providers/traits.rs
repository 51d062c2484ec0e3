//! Model client trait.
//!
//! The service talks to the hosted model through [`ModelClient`] only, so
//! tests and alternative backends plug in without touching request
//! handling. Implementations classify failures into [`WordweaveError`]
//! variants; retry policy lives in the caller (see
//! [`with_retry`](super::retry::with_retry)).
//!
//! [`WordweaveError`]: crate::WordweaveError

use async_trait::async_trait;

use crate::Result;
use crate::types::InvokeOptions;

/// A hosted text model that turns a prompt into raw text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Provider name for logging and metrics.
    fn name(&self) -> &str;

    /// Model identifier sent with each request.
    fn model_id(&self) -> &str;

    /// Send one prompt and return the model's text reply.
    ///
    /// Fails with `Throttled`, `InvalidRequest`, `AccessDenied`, `Network`,
    /// `Api` or `Unknown`.
    async fn invoke(&self, prompt: &str, options: &InvokeOptions) -> Result<String>;

    /// Cheap reachability check for the health endpoint.
    ///
    /// Default: always healthy.
    async fn health(&self) -> Result<()> {
        Ok(())
    }
}
