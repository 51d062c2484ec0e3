use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use wordweave::providers::{RetryConfig, with_retry};
use wordweave::{Result, WordweaveError};

/// Fails N times with the given error, then succeeds.
struct FailThenSucceed {
    fail_count: AtomicU32,
    fail_with: fn() -> WordweaveError,
    total_calls: AtomicU32,
}

impl FailThenSucceed {
    fn new(failures: u32, fail_with: fn() -> WordweaveError) -> Self {
        Self {
            fail_count: AtomicU32::new(failures),
            fail_with,
            total_calls: AtomicU32::new(0),
        }
    }

    async fn call(&self) -> Result<&'static str> {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        let remaining = self.fail_count.load(Ordering::Relaxed);
        if remaining > 0 {
            self.fail_count.fetch_sub(1, Ordering::Relaxed);
            return Err((self.fail_with)());
        }
        Ok("ok")
    }

    fn call_count(&self) -> u32 {
        self.total_calls.load(Ordering::Relaxed)
    }
}

fn fast() -> RetryConfig {
    RetryConfig::new()
        .max_attempts(3)
        .initial_delay(Duration::from_millis(1))
        .jitter(false)
}

#[tokio::test]
async fn retries_on_transient_error_then_succeeds() {
    let op = FailThenSucceed::new(2, || WordweaveError::Throttled { retry_after: None });
    let op = &op;

    let result = with_retry(&fast(), "mock", "generate", move || op.call()).await;

    assert_eq!(result.unwrap(), "ok");
    assert_eq!(op.call_count(), 3); // 2 failures + 1 success
}

#[tokio::test]
async fn gives_up_after_max_attempts() {
    let op = FailThenSucceed::new(10, || WordweaveError::Network("timeout".into()));
    let op = &op;

    let result = with_retry(&fast(), "mock", "generate", move || op.call()).await;

    assert!(matches!(result, Err(WordweaveError::Network(_))));
    assert_eq!(op.call_count(), 3);
}

#[tokio::test]
async fn does_not_retry_permanent_errors() {
    let op = FailThenSucceed::new(1, || WordweaveError::AccessDenied);
    let op = &op;

    let result = with_retry(&fast(), "mock", "generate", move || op.call()).await;

    assert!(matches!(result, Err(WordweaveError::AccessDenied)));
    assert_eq!(op.call_count(), 1);
}

#[tokio::test]
async fn invalid_request_fails_immediately() {
    let op = FailThenSucceed::new(1, || WordweaveError::InvalidRequest("too long".into()));
    let op = &op;

    let result = with_retry(&fast(), "mock", "analyze", move || op.call()).await;

    assert!(matches!(result, Err(WordweaveError::InvalidRequest(_))));
    assert_eq!(op.call_count(), 1);
}

#[tokio::test]
async fn disabled_makes_one_attempt() {
    let op = FailThenSucceed::new(1, || WordweaveError::Network("reset".into()));
    let op = &op;

    let result = with_retry(&RetryConfig::disabled(), "mock", "generate", move || op.call()).await;

    assert!(result.is_err());
    assert_eq!(op.call_count(), 1);
}

#[tokio::test]
async fn custom_predicate_controls_retries() {
    fn never(_: &WordweaveError) -> bool {
        false
    }
    let op = FailThenSucceed::new(1, || WordweaveError::Network("reset".into()));
    let op = &op;

    let config = fast().retry_if(never);
    let result = with_retry(&config, "mock", "generate", move || op.call()).await;

    assert!(result.is_err());
    assert_eq!(op.call_count(), 1);
}

// ============================================================================
// Backoff timing (paused clock)
// ============================================================================

#[tokio::test(start_paused = true)]
async fn backoff_doubles_between_attempts() {
    let op = FailThenSucceed::new(2, || WordweaveError::Network("reset".into()));
    let op = &op;
    let config = RetryConfig::new()
        .max_attempts(3)
        .initial_delay(Duration::from_secs(1))
        .jitter(false);

    let start = tokio::time::Instant::now();
    let result = with_retry(&config, "mock", "generate", move || op.call()).await;

    assert!(result.is_ok());
    // 1s + 2s
    assert_eq!(start.elapsed(), Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn retry_after_hint_overrides_backoff() {
    let op = FailThenSucceed::new(1, || WordweaveError::Throttled {
        retry_after: Some(Duration::from_secs(7)),
    });
    let op = &op;

    let start = tokio::time::Instant::now();
    let result = with_retry(&fast(), "mock", "generate", move || op.call()).await;

    assert!(result.is_ok());
    assert_eq!(start.elapsed(), Duration::from_secs(7));
}

#[tokio::test(start_paused = true)]
async fn long_retry_after_hint_is_capped() {
    let op = FailThenSucceed::new(1, || WordweaveError::Throttled {
        retry_after: Some(Duration::from_secs(3600)),
    });
    let op = &op;

    let start = tokio::time::Instant::now();
    let result = with_retry(&fast(), "mock", "generate", move || op.call()).await;

    assert!(result.is_ok());
    assert_eq!(start.elapsed(), Duration::from_secs(16));
}

#[tokio::test(start_paused = true)]
async fn jitter_stays_within_initial_delay() {
    let op = FailThenSucceed::new(1, || WordweaveError::Network("reset".into()));
    let op = &op;
    let config = RetryConfig::new()
        .max_attempts(2)
        .initial_delay(Duration::from_secs(1))
        .jitter(true);

    let start = tokio::time::Instant::now();
    with_retry(&config, "mock", "generate", move || op.call())
        .await
        .unwrap();

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed <= Duration::from_secs(2));
}

// ============================================================================
// Delay calculation
// ============================================================================

#[test]
fn defaults() {
    let config = RetryConfig::default();
    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.initial_delay, Duration::from_secs(1));
    assert_eq!(config.max_delay, Duration::from_secs(16));
    assert!(config.jitter);
}

#[test]
fn delay_is_capped() {
    let config = RetryConfig::new().jitter(false);
    assert_eq!(config.delay_for_attempt(0), Duration::from_secs(1));
    assert_eq!(config.delay_for_attempt(3), Duration::from_secs(8));
    assert_eq!(config.delay_for_attempt(4), Duration::from_secs(16));
    assert_eq!(config.delay_for_attempt(10), Duration::from_secs(16));
    assert_eq!(config.delay_for_attempt(u32::MAX), Duration::from_secs(16));
}

#[test]
fn effective_delay_prefers_hint() {
    let config = RetryConfig::new();
    let hint = Duration::from_millis(250);
    assert_eq!(config.effective_delay(2, Some(hint)), hint);
}

#[test]
fn effective_delay_caps_hint() {
    let config = RetryConfig::default();
    let delay = config.effective_delay(0, Some(Duration::from_secs(3600)));
    assert_eq!(delay, config.max_delay);

    let config = RetryConfig::new().max_delay(Duration::from_secs(2));
    assert_eq!(
        config.effective_delay(0, Some(Duration::from_secs(5))),
        Duration::from_secs(2)
    );
}
