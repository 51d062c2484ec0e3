//! WordWeave - poem generation and visual theme analysis over a hosted LLM
//!
//! Three words become a 12-line poem with a literary analysis and a
//! presentation theme; any poem becomes quantified visual parameters
//! (emotion, palette, animation, typography, layout). Model output is
//! untrusted: it is parsed leniently, sanitized into fixed ranges, and
//! replaced by deterministic fallbacks when it cannot be used. Results are
//! cached by normalized input.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordweave::{AnthropicClient, PoemRequest, WordweaveService};
//!
//! #[tokio::main]
//! async fn main() -> wordweave::Result<()> {
//!     let model = AnthropicClient::new("sk-ant-your-key", "claude-3-5-sonnet-20241022")?;
//!     let service = WordweaveService::builder()
//!         .model(Arc::new(model))
//!         .build()?;
//!
//!     let outcome = service
//!         .generate(PoemRequest::new("dance", "golden", "leaves"))
//!         .await?;
//!
//!     println!("{}", outcome.data.poem);
//!     Ok(())
//! }
//! ```
//!
//! # Offline pieces
//!
//! The pure stages are usable without a model:
//!
//! ```rust
//! use wordweave::{PoemRequest, fallback, sanitize};
//!
//! let generated = fallback::generate(&PoemRequest::new("drift", "silver", "moon"));
//! let lines = generated.poem.lines().filter(|l| !l.trim().is_empty()).count();
//! assert_eq!(lines, 12);
//!
//! let analysis = sanitize::sanitize(fallback::analyze_text(&generated.poem));
//! assert!(analysis.layout.gradient_angle < 360.0);
//! ```

pub mod cache;
pub mod error;
pub mod fallback;
pub mod parse;
pub mod prompts;
pub mod providers;
pub mod sanitize;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod tables;
pub mod telemetry;
pub mod transform;
pub mod types;
pub mod validate;
pub mod version;

// Re-export main types at crate root
pub use cache::{CacheConfig, CacheGateway, CacheKey, CacheStore, MemoryStore};
pub use error::{Result, WordweaveError};
pub use providers::{AnthropicClient, ModelClient, RetryConfig};
pub use service::{FailureMode, FailurePolicy, Outcome, WordweaveService, WordweaveServiceBuilder};
pub use validate::{ValidationCode, ValidationError};
pub use version::{BuildInfo, PKG_VERSION, build_info, version_string};

// Re-export all types
pub use types::{
    AnalysisResult, AnimationStyle, GeneratedPoem, InvokeOptions, LiteraryAnalysis, PoemAnalysis,
    PoemRecord, PoemRequest, Theme, ThemeRequest,
};
