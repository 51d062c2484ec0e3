//! Request orchestration.
//!
//! [`WordweaveService`] runs both operations end to end:
//!
//! ```text
//! cache lookup ─hit──────────────────────────────────────────► cached
//!      │miss
//!      ▼
//! model (retry + per-attempt timeout) ─err─► FailurePolicy ─► fallback | error
//!      │ok
//!      ▼
//! parse ─err─► fallback (not cached)
//!      │ok
//!      ▼
//! sanitize ─► transform ─► cache put ─────────────────────────► fresh
//! ```
//!
//! Fallback results are deterministic, so they are served but never cached;
//! the next request gets another chance at a model answer.

mod builder;

pub use builder::{DEFAULT_MODEL_TIMEOUT, WordweaveServiceBuilder};

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::cache::{CacheCategory, CacheGateway, CacheKey};
use crate::providers::{ModelClient, RetryConfig, with_retry};
use crate::types::{
    AnalysisResult, GeneratedPoem, InvokeOptions, PoemRecord, PoemRequest, ThemeRequest,
};
use crate::{Result, WordweaveError, fallback, parse, prompts, sanitize, telemetry, transform};

/// Hex characters of the cache hash recorded in analysis metadata.
const POEM_HASH_CHARS: usize = 16;

/// What an operation does when the model call fails outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Serve a deterministic offline result.
    Fallback,
    /// Return the error to the caller.
    Propagate,
}

/// Per-operation [`FailureMode`].
///
/// Parse failures always fall back; this only governs model errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailurePolicy {
    /// Default: fallback.
    pub generation: FailureMode,
    /// Default: propagate.
    pub analysis: FailureMode,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            generation: FailureMode::Fallback,
            analysis: FailureMode::Propagate,
        }
    }
}

/// An operation result and whether it came from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub data: T,
    pub cached: bool,
}

impl<T> Outcome<T> {
    fn cached(data: T) -> Self {
        Self { data, cached: true }
    }

    fn fresh(data: T) -> Self {
        Self {
            data,
            cached: false,
        }
    }
}

/// Dependency status reported by [`WordweaveService::health`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub cache: bool,
    pub model: bool,
}

/// Poem generation and theme analysis over a model client and a cache.
///
/// Built with [`WordweaveService::builder`]; cheap to share behind an `Arc`.
pub struct WordweaveService {
    model: Arc<dyn ModelClient>,
    cache: CacheGateway,
    retry: RetryConfig,
    model_timeout: Duration,
    policy: FailurePolicy,
    generation_options: InvokeOptions,
    analysis_options: InvokeOptions,
}

impl WordweaveService {
    pub fn builder() -> WordweaveServiceBuilder {
        WordweaveServiceBuilder::new()
    }

    /// Identifier of the configured model.
    pub fn model_id(&self) -> &str {
        self.model.model_id()
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn cache(&self) -> &CacheGateway {
        &self.cache
    }

    /// Generate a 12-line poem from three words, with analysis and theme.
    #[instrument(name = "service.generate", skip(self, words), fields(verb = %words.verb, adjective = %words.adjective, noun = %words.noun))]
    pub async fn generate(&self, words: PoemRequest) -> Result<Outcome<PoemRecord>> {
        let start = Instant::now();
        let result = self.generate_inner(&words, start).await;
        record_request("generate", start, &result);
        result
    }

    async fn generate_inner(
        &self,
        words: &PoemRequest,
        start: Instant,
    ) -> Result<Outcome<PoemRecord>> {
        let key = CacheKey::for_words(CacheCategory::Poem, words);
        if let Some(record) = self.cache.get::<PoemRecord>(&key).await {
            return Ok(Outcome::cached(record));
        }

        let prompt = prompts::generation_prompt(words);
        let (generated, from_model) = match self
            .invoke("generate", &prompt, &self.generation_options)
            .await
        {
            Ok(raw) => match parse::parse_generated_poem(&raw) {
                Ok(mut generated) => {
                    generated.analysis = sanitize::sanitize_literary(generated.analysis);
                    (generated, true)
                }
                Err(e) => {
                    record_fallback("generate", "parse", &e);
                    (fallback::generate(words), false)
                }
            },
            Err(e) => match self.policy.generation {
                FailureMode::Fallback => {
                    record_fallback("generate", "model", &e);
                    (fallback::generate(words), false)
                }
                FailureMode::Propagate => return Err(e),
            },
        };

        let record = self.assemble(generated, words, start);
        if from_model {
            self.cache.put(&key, &record).await;
        }
        Ok(Outcome::fresh(record))
    }

    fn assemble(
        &self,
        generated: GeneratedPoem,
        words: &PoemRequest,
        start: Instant,
    ) -> PoemRecord {
        transform::build_record(generated, words, transform::poem_id(), start.elapsed())
    }

    /// Analyse a poem into quantified visual theme parameters.
    #[instrument(name = "service.analyze", skip(self, request), fields(poem_chars = request.poem.chars().count()))]
    pub async fn analyze(&self, request: ThemeRequest) -> Result<Outcome<AnalysisResult>> {
        let start = Instant::now();
        let result = self.analyze_inner(&request.poem).await;
        record_request("analyze", start, &result);
        result
    }

    async fn analyze_inner(&self, poem: &str) -> Result<Outcome<AnalysisResult>> {
        let key = CacheKey::for_text(CacheCategory::ThemeAnalysis, poem);
        if let Some(analysis) = self.cache.get::<AnalysisResult>(&key).await {
            return Ok(Outcome::cached(analysis));
        }

        let prompt = prompts::analysis_prompt(poem);
        let (analysis, from_model) = match self
            .invoke("analyze", &prompt, &self.analysis_options)
            .await
        {
            Ok(raw) => match parse::parse_analysis(&raw) {
                Ok(analysis) => (sanitize::sanitize(analysis), true),
                Err(e) => {
                    record_fallback("analyze", "parse", &e);
                    (fallback::fixed_analysis(), false)
                }
            },
            Err(e) => match self.policy.analysis {
                FailureMode::Fallback => {
                    record_fallback("analyze", "model", &e);
                    (fallback::analyze_text(poem), false)
                }
                FailureMode::Propagate => return Err(e),
            },
        };

        let analysis = self.stamp(analysis, &key, from_model);
        if from_model {
            self.cache.put(&key, &analysis).await;
        }
        Ok(Outcome::fresh(analysis))
    }

    /// Record provenance in the analysis metadata.
    fn stamp(
        &self,
        mut analysis: AnalysisResult,
        key: &CacheKey,
        from_model: bool,
    ) -> AnalysisResult {
        let meta = &mut analysis.metadata;
        meta.analysis_timestamp = Some(chrono::Utc::now().to_rfc3339());
        meta.model_used = from_model.then(|| self.model.model_id().to_string());
        meta.poem_hash = Some(key.hash().chars().take(POEM_HASH_CHARS).collect());
        analysis
    }

    /// One model call with retries; each attempt is bounded by the model
    /// timeout, which counts as a network error.
    async fn invoke(
        &self,
        operation: &'static str,
        prompt: &str,
        options: &InvokeOptions,
    ) -> Result<String> {
        let model = self.model.as_ref();
        let timeout = self.model_timeout;
        let provider = model.name();
        with_retry(&self.retry, provider, operation, move || async move {
            let result = match tokio::time::timeout(timeout, model.invoke(prompt, options)).await {
                Ok(result) => result,
                Err(_) => Err(WordweaveError::Network(format!(
                    "model call timed out after {}s",
                    timeout.as_secs_f64()
                ))),
            };
            let status = if result.is_ok() { "ok" } else { "error" };
            metrics::counter!(telemetry::MODEL_CALLS_TOTAL,
                "provider" => provider.to_owned(),
                "operation" => operation,
                "status" => status,
            )
            .increment(1);
            if let Err(e) = &result {
                debug!(provider, operation, error = %e, "model call failed");
            }
            result
        })
        .await
    }

    /// Probe the cache store and the model client.
    pub async fn health(&self) -> HealthReport {
        let cache = self.cache.health().await;
        let model = match tokio::time::timeout(self.model_timeout, self.model.health()).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                warn!(error = %e, "model health check failed");
                false
            }
            Err(_) => {
                warn!("model health check timed out");
                false
            }
        };
        HealthReport { cache, model }
    }
}

fn record_request<T>(operation: &'static str, start: Instant, result: &Result<Outcome<T>>) {
    let elapsed = start.elapsed();
    let status = if result.is_ok() { "ok" } else { "error" };
    metrics::counter!(telemetry::REQUESTS_TOTAL, "operation" => operation, "status" => status)
        .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "operation" => operation)
        .record(elapsed.as_secs_f64());
    if let Ok(outcome) = result {
        info!(
            operation,
            cached = outcome.cached,
            duration_ms = elapsed.as_millis() as u64,
            "request complete"
        );
    }
}

fn record_fallback(operation: &'static str, reason: &'static str, error: &WordweaveError) {
    warn!(operation, reason, error = %error, "serving fallback result");
    metrics::counter!(telemetry::FALLBACKS_TOTAL, "operation" => operation, "reason" => reason)
        .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults() {
        let policy = FailurePolicy::default();
        assert_eq!(policy.generation, FailureMode::Fallback);
        assert_eq!(policy.analysis, FailureMode::Propagate);
    }

    #[test]
    fn policy_from_toml_like_json() {
        let policy: FailurePolicy = serde_json::from_str(r#"{"analysis": "fallback"}"#).unwrap();
        assert_eq!(policy.generation, FailureMode::Fallback);
        assert_eq!(policy.analysis, FailureMode::Fallback);
    }

    #[test]
    fn builder_requires_model() {
        let err = WordweaveService::builder().build().err().unwrap();
        assert!(matches!(err, WordweaveError::Configuration(_)));
    }
}
