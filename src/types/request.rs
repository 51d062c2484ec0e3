//! Request and model invocation types.

use serde::{Deserialize, Serialize};

use super::LiteraryAnalysis;

/// Validated poem generation input: three trimmed, lowercased words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoemRequest {
    pub verb: String,
    pub adjective: String,
    pub noun: String,
}

impl PoemRequest {
    /// Build a request, trimming and lowercasing each word.
    pub fn new(verb: &str, adjective: &str, noun: &str) -> Self {
        Self {
            verb: verb.trim().to_lowercase(),
            adjective: adjective.trim().to_lowercase(),
            noun: noun.trim().to_lowercase(),
        }
    }
}

/// Validated theme analysis input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRequest {
    /// Trimmed poem text.
    pub poem: String,
}

/// A poem and its literary analysis as decoded from model output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedPoem {
    pub poem: String,
    pub analysis: LiteraryAnalysis,
}

/// Sampling options for a single model invocation.
///
/// ```rust
/// # use wordweave::InvokeOptions;
/// let options = InvokeOptions::new(3000).temperature(0.3).top_p(0.9);
/// assert_eq!(options.max_tokens, 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeOptions {
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl InvokeOptions {
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
            top_p: None,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}
