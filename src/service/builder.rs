//! Builder for configuring service instances

use std::sync::Arc;
use std::time::Duration;

use super::{FailurePolicy, WordweaveService};
use crate::cache::{CacheConfig, CacheGateway};
use crate::prompts;
use crate::providers::{ModelClient, RetryConfig};
use crate::types::InvokeOptions;
use crate::{Result, WordweaveError};

/// Default upper bound on a single model attempt.
pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`WordweaveService`].
///
/// A model client is required; everything else has a default. Without an
/// explicit cache the service uses an in-memory store with default TTLs.
pub struct WordweaveServiceBuilder {
    model: Option<Arc<dyn ModelClient>>,
    cache: Option<CacheGateway>,
    retry: RetryConfig,
    model_timeout: Duration,
    policy: FailurePolicy,
    generation_options: InvokeOptions,
    analysis_options: InvokeOptions,
}

impl Default for WordweaveServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordweaveServiceBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            cache: None,
            retry: RetryConfig::default(),
            model_timeout: DEFAULT_MODEL_TIMEOUT,
            policy: FailurePolicy::default(),
            generation_options: prompts::generation_options(),
            analysis_options: prompts::analysis_options(),
        }
    }

    /// Set the model client.
    pub fn model(mut self, model: Arc<dyn ModelClient>) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the cache gateway.
    pub fn cache(mut self, cache: CacheGateway) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the retry policy for model calls.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Bound each model attempt. Default: 30 seconds.
    pub fn model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
    }

    /// Set what each operation does when the model call fails.
    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sampling options for poem generation.
    pub fn generation_options(mut self, options: InvokeOptions) -> Self {
        self.generation_options = options;
        self
    }

    /// Sampling options for theme analysis.
    pub fn analysis_options(mut self, options: InvokeOptions) -> Self {
        self.analysis_options = options;
        self
    }

    /// Build the service.
    pub fn build(self) -> Result<WordweaveService> {
        let model = self
            .model
            .ok_or_else(|| WordweaveError::Configuration("no model client configured".into()))?;

        if self.model_timeout.is_zero() {
            return Err(WordweaveError::Configuration(
                "model timeout must be greater than zero".into(),
            ));
        }

        let cache = self
            .cache
            .unwrap_or_else(|| CacheGateway::in_memory(CacheConfig::default()));

        Ok(WordweaveService {
            model,
            cache,
            retry: self.retry,
            model_timeout: self.model_timeout,
            policy: self.policy,
            generation_options: self.generation_options,
            analysis_options: self.analysis_options,
        })
    }
}
