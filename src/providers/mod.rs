//! Model clients and retry policy.
//!
//! [`ModelClient`] is the seam between the service and the hosted model.
//! [`AnthropicClient`] is the bundled implementation; [`with_retry`] and
//! [`RetryConfig`] bound how hard the service tries before giving up.

pub mod anthropic;
pub mod retry;
pub mod traits;

pub use anthropic::AnthropicClient;
pub use retry::{RetryConfig, RetryPredicate, with_retry};
pub use traits::ModelClient;
