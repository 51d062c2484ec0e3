//! Presentation schema returned to the frontend for generated poems.
//!
//! Field names follow the frontend's `PoemData` interface, which mixes
//! camelCase (`visualRecommendations`, `fontFamily`) with snake_case
//! (`emotional_tone`, `literary_devices`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AnimationStyle, Metaphor, TypographyMood};

label_enum! {
    /// Emotional intensity bucket.
    pub enum Intensity {
        #[default]
        Medium => "medium",
        Low => "low",
        High => "high",
    }
}

/// A generated poem with everything the frontend renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemRecord {
    pub poem: String,
    pub analysis: PoemAnalysis,
    pub theme: Theme,
    pub metadata: PoemMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemAnalysis {
    #[serde(rename = "themeAnalysis")]
    pub theme_analysis: ThemeAnalysis,
    #[serde(rename = "visualRecommendations")]
    pub visual_recommendations: VisualRecommendations,
    #[serde(rename = "poetryMetrics")]
    pub poetry_metrics: PoetryMetrics,
}

// ============================================================================
// Theme analysis
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeAnalysis {
    pub emotional_tone: EmotionalTone,
    pub themes: Vec<String>,
    pub literary_devices: Vec<Metaphor>,
    pub word_analysis: WordAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalTone {
    pub primary: String,
    /// The mood, when it differs from the primary emotion.
    pub secondary: Option<String>,
    pub intensity: Intensity,
    pub scores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub original: super::PoemRequest,
    pub enhanced: super::PoemRequest,
    pub transformation_quality: String,
}

// ============================================================================
// Visual recommendations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualRecommendations {
    pub colors: ColorRecommendations,
    pub typography: TypographyRecommendations,
    pub animations: AnimationRecommendations,
    pub layout: LayoutRecommendations,
    pub effects: VisualEffects,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecommendations {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub gradient: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyRecommendations {
    pub font_family: String,
    pub font_weight: String,
    pub letter_spacing: String,
    pub line_height: f64,
    pub font_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRecommendations {
    #[serde(serialize_with = "super::lenient::whole")]
    pub duration: f64,
    pub easing: String,
    #[serde(serialize_with = "super::lenient::whole")]
    pub stagger: f64,
    pub style: AnimationStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecommendations {
    pub style: String,
    pub alignment: String,
    pub spacing: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisualEffects {
    pub blur: bool,
    pub glow: bool,
    pub shadow: bool,
    pub gradient: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoetryMetrics {
    pub readability_score: f64,
    pub emotional_impact: f64,
    pub creativity_index: f64,
    pub coherence_score: f64,
}

// ============================================================================
// Simple theme and metadata
// ============================================================================

/// Simplified theme consumed directly by the frontend's `Theme` interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ThemeColors,
    pub animations: ThemeAnimations,
    pub typography: ThemeTypography,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    /// Two or three gradient stops.
    pub gradient: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeAnimations {
    pub style: AnimationStyle,
    #[serde(serialize_with = "super::lenient::whole")]
    pub duration: f64,
    #[serde(serialize_with = "super::lenient::whole")]
    pub stagger: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTypography {
    pub mood: TypographyMood,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemMetadata {
    /// `poem-{unix seconds}-{8 hex chars}`.
    pub id: String,
    pub word_count: usize,
    pub sentiment: String,
    pub emotion: String,
    /// Seconds spent producing the poem.
    pub generation_time: f64,
}
