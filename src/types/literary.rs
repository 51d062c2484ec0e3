//! Literary analysis produced alongside a generated poem.
//!
//! The generation prompt asks the model for a poem plus this verbose,
//! per-domain analysis (rhyme, metaphor, rhythm, temporal cues, reading
//! pace, accessibility text and a traditional summary). It is reshaped into
//! the presentation schema by [`crate::transform`].

use serde::{Deserialize, Serialize};

use super::AnimationStyle;
use super::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteraryAnalysis {
    pub rhyme: Rhyme,
    pub metaphors: Metaphors,
    pub rhythm: Rhythm,
    pub temporal: Temporal,
    pub reading_pace: ReadingPace,
    pub accessibility: Accessibility,
    pub traditional: Traditional,
    pub metadata: LiteraryMetadata,
}

// ============================================================================
// Rhyme
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rhyme {
    /// e.g. `AABB`, `ABAB` or `free verse`.
    #[serde(deserialize_with = "lenient::text")]
    pub scheme: String,
    /// `[0, 1]`.
    #[serde(deserialize_with = "lenient::number")]
    pub density: f64,
    pub typography: RhymeTypography,
}

impl Default for Rhyme {
    fn default() -> Self {
        Self {
            scheme: "free verse".to_string(),
            density: 0.0,
            typography: RhymeTypography::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhymeTypography {
    /// `serif` for formal rhyme, `sans-serif` for free verse.
    #[serde(deserialize_with = "lenient::text")]
    pub font_style: String,
    /// `[1.2, 2.0]`.
    #[serde(deserialize_with = "lenient::number")]
    pub line_spacing: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub text_alignment: String,
}

impl Default for RhymeTypography {
    fn default() -> Self {
        Self {
            font_style: "sans-serif".to_string(),
            line_spacing: 1.6,
            text_alignment: "left".to_string(),
        }
    }
}

// ============================================================================
// Metaphors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metaphors {
    pub identified: Vec<Metaphor>,
    pub visual_representations: Vec<VisualRepresentation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metaphor {
    #[serde(deserialize_with = "lenient::count")]
    pub line: u32,
    #[serde(deserialize_with = "lenient::text")]
    pub text: String,
    /// visual, conceptual, sensory or abstract.
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: String,
}

impl Metaphor {
    pub fn new(line: u32, text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualRepresentation {
    #[serde(deserialize_with = "lenient::text")]
    pub metaphor: String,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: String,
    #[serde(deserialize_with = "lenient::text")]
    pub color: String,
    #[serde(deserialize_with = "lenient::text")]
    pub animation: String,
}

// ============================================================================
// Rhythm
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rhythm {
    /// Syllables per line.
    #[serde(deserialize_with = "lenient::counts")]
    pub syllable_pattern: Vec<u32>,
    /// iambic, trochaic, anapestic, dactylic or free.
    #[serde(deserialize_with = "lenient::text")]
    pub stress_pattern: String,
    /// e.g. `iambic pentameter`.
    #[serde(deserialize_with = "lenient::text")]
    pub rhythm_type: String,
    pub animation_timing: RhythmTiming,
    /// Animation style suggested by the fallback generator's verb, preferred
    /// by the presentation transform when present. Never read from model JSON.
    #[serde(skip)]
    pub animation_style: Option<AnimationStyle>,
}

impl Default for Rhythm {
    fn default() -> Self {
        Self {
            syllable_pattern: Vec::new(),
            stress_pattern: "free".to_string(),
            rhythm_type: "free verse".to_string(),
            animation_timing: RhythmTiming::default(),
            animation_style: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhythmTiming {
    /// Milliseconds, `[500, 5000]`.
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::whole")]
    pub base_duration: f64,
    /// Per-element delays in milliseconds, each `[0, 1000]`.
    #[serde(deserialize_with = "lenient::numbers", serialize_with = "lenient::wholes")]
    pub stagger_pattern: Vec<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub easing_function: String,
}

impl Default for RhythmTiming {
    fn default() -> Self {
        Self {
            base_duration: 2000.0,
            stagger_pattern: vec![0.0, 150.0, 300.0, 450.0],
            easing_function: "ease-out".to_string(),
        }
    }
}

// ============================================================================
// Temporal
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Temporal {
    #[serde(deserialize_with = "lenient::texts")]
    pub seasonal_hints: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub time_of_day: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub temporal_keywords: Vec<String>,
    pub background_suggestions: BackgroundSuggestions,
}

impl Default for Temporal {
    fn default() -> Self {
        Self {
            seasonal_hints: Vec::new(),
            time_of_day: "neutral".to_string(),
            temporal_keywords: Vec::new(),
            background_suggestions: BackgroundSuggestions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSuggestions {
    /// Hex colors after sanitization.
    #[serde(deserialize_with = "lenient::texts")]
    pub gradient_colors: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub particle_effects: String,
    #[serde(deserialize_with = "lenient::text")]
    pub lighting_mood: String,
}

impl Default for BackgroundSuggestions {
    fn default() -> Self {
        Self {
            gradient_colors: vec!["#6b7280".to_string(), "#9ca3af".to_string()],
            particle_effects: "dust".to_string(),
            lighting_mood: "neutral".to_string(),
        }
    }
}

// ============================================================================
// Reading pace
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingPace {
    #[serde(deserialize_with = "lenient::count")]
    pub syllable_count: u32,
    #[serde(deserialize_with = "lenient::number")]
    pub average_line_length: f64,
    /// `[0.1, 1]`.
    #[serde(deserialize_with = "lenient::number")]
    pub complexity_score: f64,
    pub auto_scroll_timing: AutoScroll,
}

impl Default for ReadingPace {
    fn default() -> Self {
        Self {
            syllable_count: 0,
            average_line_length: 8.0,
            complexity_score: 0.5,
            auto_scroll_timing: AutoScroll::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScroll {
    /// Words per minute, `[100, 500]`.
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::whole")]
    pub base_speed: f64,
    /// Line numbers, each `[1, 12]`.
    #[serde(deserialize_with = "lenient::numbers", serialize_with = "lenient::wholes")]
    pub pause_points: Vec<f64>,
    pub speed_variations: SpeedVariations,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self {
            base_speed: 200.0,
            pause_points: vec![3.0, 7.0, 11.0],
            speed_variations: SpeedVariations::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedVariations {
    #[serde(deserialize_with = "lenient::counts")]
    pub slow_sections: Vec<u32>,
    #[serde(deserialize_with = "lenient::counts")]
    pub fast_sections: Vec<u32>,
}

// ============================================================================
// Accessibility
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Accessibility {
    #[serde(deserialize_with = "lenient::text")]
    pub screen_reader_description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub poem_summary: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub metaphor_explanations: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub emotional_context: String,
    #[serde(deserialize_with = "lenient::text")]
    pub visual_elements: String,
}

// ============================================================================
// Traditional
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Traditional {
    #[serde(deserialize_with = "lenient::text")]
    pub theme: String,
    #[serde(deserialize_with = "lenient::text")]
    pub mood: String,
    /// Hex colors after sanitization.
    #[serde(deserialize_with = "lenient::texts")]
    pub dominant_colors: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub emotion: String,
    #[serde(deserialize_with = "lenient::text")]
    pub imagery_type: String,
    #[serde(deserialize_with = "lenient::count")]
    pub word_count: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub line_count: u32,
}

impl Default for Traditional {
    fn default() -> Self {
        Self {
            theme: "contemplative".to_string(),
            mood: "reflective".to_string(),
            dominant_colors: Vec::new(),
            emotion: "neutral".to_string(),
            imagery_type: "abstract".to_string(),
            word_count: 0,
            line_count: 0,
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteraryMetadata {
    /// `[0, 1]`.
    #[serde(rename = "analysis_confidence", deserialize_with = "lenient::number")]
    pub confidence: f64,
    #[serde(
        rename = "processing_notes",
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient::texts")]
    pub enhanced_features: Vec<String>,
    /// RFC 3339 time the poem was generated.
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation_time: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_used: Option<String>,
}

impl Default for LiteraryMetadata {
    fn default() -> Self {
        Self {
            confidence: 0.8,
            notes: None,
            enhanced_features: Vec::new(),
            generation_time: None,
            model_used: None,
        }
    }
}
