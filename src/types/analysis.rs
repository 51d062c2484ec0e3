//! Visual theme analysis of a poem.
//!
//! [`AnalysisResult`] mirrors the JSON object the model is asked to return
//! from a theme analysis prompt. Field defaults are the values used when
//! the model omits a field; see [`crate::sanitize`] for the valid ranges.

use serde::{Deserialize, Serialize};

use super::lenient;

label_enum! {
    /// Overall animation character.
    pub enum AnimationStyle {
        #[default]
        Calm => "calm",
        Energetic => "energetic",
        Dramatic => "dramatic",
        Mystical => "mystical",
    }
}

label_enum! {
    /// Dominant color temperature of a palette.
    pub enum Temperature {
        #[default]
        Neutral => "neutral",
        Warm => "warm",
        Cool => "cool",
    }
}

label_enum! {
    /// Palette saturation level.
    pub enum Saturation {
        #[default]
        Medium => "medium",
        High => "high",
        Low => "low",
    }
}

label_enum! {
    /// How text elements enter the screen.
    pub enum MovementType {
        #[default]
        Fade => "fade",
        Slide => "slide",
        Bounce => "bounce",
        Float => "float",
        Pulse => "pulse",
        Wave => "wave",
        Spiral => "spiral",
        Zoom => "zoom",
    }
}

label_enum! {
    /// Background particle effect.
    pub enum ParticleKind {
        #[default]
        Dust => "dust",
        Sparkles => "sparkles",
        Leaves => "leaves",
        Rain => "rain",
        Snow => "snow",
        Bubbles => "bubbles",
        LightRays => "light_rays",
        Fireflies => "fireflies",
    }
}

label_enum! {
    /// Dominant imagery category.
    pub enum ImageryCategory {
        #[default]
        Abstract => "abstract",
        Nature => "nature",
        Urban => "urban",
        Cosmic => "cosmic",
        Human => "human",
        Architectural => "architectural",
        Elemental => "elemental",
    }
}

label_enum! {
    /// Typeface character.
    pub enum TypographyMood {
        #[default]
        Modern => "modern",
        Classic => "classic",
        Playful => "playful",
        Elegant => "elegant",
    }
}

/// Complete visual theme analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub emotion: Emotion,
    pub colors: Colors,
    pub animation: Animation,
    pub imagery: Imagery,
    pub typography: Typography,
    pub layout: Layout,
    pub metadata: AnalysisMetadata,
}

// ============================================================================
// Emotion
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emotion {
    /// Dominant emotion label (free text).
    #[serde(deserialize_with = "lenient::text")]
    pub primary: String,
    /// Emotional intensity in `[0, 1]`.
    #[serde(deserialize_with = "lenient::number")]
    pub intensity: f64,
    /// Up to three secondary emotions.
    pub secondary: Vec<SecondaryEmotion>,
}

impl Default for Emotion {
    fn default() -> Self {
        Self {
            primary: "contemplative".to_string(),
            intensity: 0.5,
            secondary: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryEmotion {
    #[serde(deserialize_with = "lenient::text")]
    pub emotion: String,
    #[serde(deserialize_with = "lenient::number")]
    pub intensity: f64,
}

impl Default for SecondaryEmotion {
    fn default() -> Self {
        Self {
            emotion: "calm".to_string(),
            intensity: 0.3,
        }
    }
}

impl SecondaryEmotion {
    pub fn new(emotion: impl Into<String>, intensity: f64) -> Self {
        Self {
            emotion: emotion.into(),
            intensity,
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    /// Up to five weighted colors, most prominent first.
    pub palette: Vec<ColorSwatch>,
    pub dominant_temperature: Temperature,
    #[serde(rename = "saturation_level")]
    pub saturation: Saturation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSwatch {
    /// `#rrggbb` after sanitization; the model may send a color name.
    #[serde(deserialize_with = "lenient::text")]
    pub hex: String,
    /// Prominence in `[0.1, 1]`.
    #[serde(deserialize_with = "lenient::number")]
    pub weight: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub role: String,
}

impl Default for ColorSwatch {
    fn default() -> Self {
        Self {
            hex: crate::tables::DEFAULT_GRAY.to_string(),
            weight: 0.5,
            role: "accent".to_string(),
        }
    }
}

impl ColorSwatch {
    pub fn new(hex: impl Into<String>, weight: f64, role: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            weight,
            role: role.into(),
        }
    }
}

// ============================================================================
// Animation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Animation {
    pub style: AnimationStyle,
    pub timing: AnimationTiming,
    pub movement_type: MovementType,
    pub particles: Particles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    /// Base duration in milliseconds, `[500, 5000]`.
    #[serde(
        rename = "duration",
        deserialize_with = "lenient::number",
        serialize_with = "lenient::whole"
    )]
    pub duration_ms: f64,
    /// Delay between elements in milliseconds, `[50, 500]`.
    #[serde(
        rename = "stagger_delay",
        deserialize_with = "lenient::number",
        serialize_with = "lenient::whole"
    )]
    pub stagger_ms: f64,
    /// CSS easing function.
    #[serde(deserialize_with = "lenient::text")]
    pub easing: String,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            stagger_ms: 150.0,
            easing: "ease-out".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Particles {
    #[serde(deserialize_with = "lenient::flag")]
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: ParticleKind,
    /// `[0.1, 1]`.
    #[serde(deserialize_with = "lenient::number")]
    pub density: f64,
    /// Speed multiplier, `[0.1, 2]`.
    #[serde(deserialize_with = "lenient::number")]
    pub speed: f64,
}

impl Default for Particles {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: ParticleKind::Dust,
            density: 0.2,
            speed: 0.5,
        }
    }
}

// ============================================================================
// Imagery
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Imagery {
    /// Up to ten concrete visual elements.
    #[serde(deserialize_with = "lenient::texts")]
    pub keywords: Vec<String>,
    pub category: ImageryCategory,
    /// Visual complexity, `[0.1, 1]`.
    #[serde(rename = "visual_density", deserialize_with = "lenient::number")]
    pub density: f64,
}

impl Default for Imagery {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            category: ImageryCategory::Abstract,
            density: 0.5,
        }
    }
}

// ============================================================================
// Typography
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub mood: TypographyMood,
    /// CSS font weight, `[300, 900]`.
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::whole")]
    pub font_weight: f64,
    /// `[0.8, 1.5]`.
    #[serde(deserialize_with = "lenient::number")]
    pub font_scale: f64,
    /// `[1.2, 2.0]`.
    #[serde(deserialize_with = "lenient::number")]
    pub line_height: f64,
    /// Letter spacing in em, `[-0.05, 0.2]`.
    #[serde(deserialize_with = "lenient::number")]
    pub letter_spacing: f64,
    /// Shadow blur radius, `[0, 4]`.
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::whole")]
    pub text_shadow: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            mood: TypographyMood::Modern,
            font_weight: 400.0,
            font_scale: 1.0,
            line_height: 1.6,
            letter_spacing: 0.0,
            text_shadow: 0.0,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Margin and padding multiplier, `[0.8, 1.4]`.
    #[serde(deserialize_with = "lenient::number")]
    pub spacing_scale: f64,
    /// Pixels, `[0, 20]`.
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::whole")]
    pub border_radius: f64,
    /// Pixels, `[0, 20]`.
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::whole")]
    pub backdrop_blur: f64,
    /// Degrees, `[0, 360)`.
    #[serde(deserialize_with = "lenient::number", serialize_with = "lenient::whole")]
    pub gradient_angle: f64,
    /// Layer opacities, each `[0.1, 1]`.
    #[serde(deserialize_with = "lenient::numbers")]
    pub opacity_variations: Vec<f64>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            spacing_scale: 1.0,
            border_radius: 8.0,
            backdrop_blur: 4.0,
            gradient_angle: 135.0,
            opacity_variations: vec![0.9, 0.6, 0.3],
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisMetadata {
    /// `[0, 1]`.
    #[serde(rename = "analysis_confidence", deserialize_with = "lenient::number")]
    pub confidence: f64,
    #[serde(rename = "processing_notes", deserialize_with = "lenient::text")]
    pub note: String,
    /// RFC 3339 time the analysis was produced.
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub analysis_timestamp: Option<String>,
    /// Model that produced the analysis.
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_used: Option<String>,
    /// First 16 hex characters of the poem's cache hash.
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub poem_hash: Option<String>,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            confidence: 0.5,
            note: String::new(),
            analysis_timestamp: None,
            model_used: None,
            poem_hash: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_enum_labels_decode_to_default() {
        let style: AnimationStyle = serde_json::from_value(serde_json::json!("frantic")).unwrap();
        assert_eq!(style, AnimationStyle::Calm);
        let kind: ParticleKind = serde_json::from_value(serde_json::json!(42)).unwrap();
        assert_eq!(kind, ParticleKind::Dust);
    }

    #[test]
    fn enum_labels_decode_case_insensitively() {
        let kind: ParticleKind = serde_json::from_value(serde_json::json!("Light_Rays")).unwrap();
        assert_eq!(kind, ParticleKind::LightRays);
        assert_eq!(serde_json::to_value(kind).unwrap(), "light_rays");
    }

    #[test]
    fn missing_sections_take_defaults() {
        let result: AnalysisResult = serde_json::from_str(r#"{"emotion": {"primary": "joy"}}"#).unwrap();
        assert_eq!(result.emotion.primary, "joy");
        assert_eq!(result.emotion.intensity, 0.5);
        assert_eq!(result.typography, Typography::default());
        assert_eq!(result.layout.opacity_variations, vec![0.9, 0.6, 0.3]);
    }

    #[test]
    fn wire_names_follow_model_schema() {
        let json = serde_json::to_value(AnalysisResult::default()).unwrap();
        assert_eq!(json["animation"]["timing"]["duration"], 2000);
        assert_eq!(json["animation"]["timing"]["stagger_delay"], 150);
        assert_eq!(json["animation"]["particles"]["type"], "dust");
        assert_eq!(json["colors"]["saturation_level"], "medium");
        assert_eq!(json["imagery"]["visual_density"], 0.5);
        assert_eq!(json["typography"]["font_weight"], 400);
        assert_eq!(json["metadata"]["analysis_confidence"], 0.5);
        assert!(json["metadata"].get("model_used").is_none());
    }

    #[test]
    fn non_numeric_numbers_decode_to_nan() {
        let typo: Typography =
            serde_json::from_str(r#"{"font_weight": "bold", "font_scale": "1.2"}"#).unwrap();
        assert!(typo.font_weight.is_nan());
        assert_eq!(typo.font_scale, 1.2);
    }
}
