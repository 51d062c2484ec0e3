//! Telemetry metric name constants.
//!
//! Centralised metric names for wordweave operations. The daemon (or an
//! embedding application) installs its own `metrics` recorder; without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `wordweave_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation`: "generate" or "analyze"
//! - `status`: outcome, "ok" or "error"
//! - `category`: cache category, "poem" or "theme_analysis"
//! - `reason`: why a fallback was used, "parse" or "model"

/// Total requests handled by the service.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "wordweave_requests_total";

/// Request duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "wordweave_request_duration_seconds";

/// Total model invocations (one per attempt).
///
/// Labels: `provider`, `operation`, `status` ("ok" | "error").
pub const MODEL_CALLS_TOTAL: &str = "wordweave_model_calls_total";

/// Total retry attempts (not counting the initial request).
///
/// Labels: `provider`, `operation`.
pub const RETRIES_TOTAL: &str = "wordweave_retries_total";

/// Total cache hits.
///
/// Labels: `category`.
pub const CACHE_HITS_TOTAL: &str = "wordweave_cache_hits_total";

/// Total cache misses (including expired entries).
///
/// Labels: `category`.
pub const CACHE_MISSES_TOTAL: &str = "wordweave_cache_misses_total";

/// Total cache store failures and timeouts.
///
/// Labels: `category`, `op` ("get" | "put" | "delete" | "encode" | "decode").
pub const CACHE_ERRORS_TOTAL: &str = "wordweave_cache_errors_total";

/// Total responses served from a deterministic fallback.
///
/// Labels: `operation`, `reason` ("parse" | "model").
pub const FALLBACKS_TOTAL: &str = "wordweave_fallbacks_total";
