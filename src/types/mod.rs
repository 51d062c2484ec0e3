//! Public types for the Wordweave API.
//!
//! Model output is untrusted, so every type here decodes leniently: missing
//! objects take their documented defaults, unknown enum labels decode to the
//! enum default, and non-numeric numbers decode to `NaN` for the sanitizer
//! to replace.

/// Declares a lowercase string label enum that decodes unknown labels to
/// its default variant.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            #[default]
            $default:ident => $default_label:literal,
            $($variant:ident => $label:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(from = "serde_json::Value")]
        pub enum $name {
            #[default]
            #[serde(rename = $default_label)]
            $default,
            $(
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $name {
            /// Every variant, default first.
            pub const ALL: &'static [$name] = &[$name::$default, $($name::$variant,)*];

            /// Wire label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$default => $default_label,
                    $($name::$variant => $label,)*
                }
            }

            /// Parse a label case-insensitively, `None` if unknown.
            pub fn parse(label: &str) -> Option<Self> {
                let label = label.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(label))
            }
        }

        impl From<serde_json::Value> for $name {
            fn from(value: serde_json::Value) -> Self {
                value
                    .as_str()
                    .and_then(Self::parse)
                    .unwrap_or_default()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use label_enum;

/// Lenient field decoders for untrusted JSON.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    fn to_f64(value: &Value) -> f64 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }

    fn to_count(value: &Value) -> u32 {
        let n = to_f64(value);
        if n.is_finite() && n > 0.0 {
            n.round().min(u32::MAX as f64) as u32
        } else {
            0
        }
    }

    /// Any JSON value as `f64`; non-numeric input becomes `NaN`.
    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(to_f64(&Value::deserialize(d)?))
    }

    /// A JSON array as `Vec<f64>`; a non-array becomes empty.
    pub fn numbers<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items.iter().map(to_f64).collect(),
            _ => Vec::new(),
        })
    }

    /// Any JSON value as a non-negative count, rounding floats.
    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        Ok(to_count(&Value::deserialize(d)?))
    }

    /// A JSON array as a list of counts; a non-array becomes empty.
    pub fn counts<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u32>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items.iter().map(to_count).collect(),
            _ => Vec::new(),
        })
    }

    /// Any JSON value as a string; numbers are rendered, null and
    /// containers become empty.
    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        })
    }

    /// Like [`text`], but null and containers become `None`.
    pub fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    /// A JSON array of strings; non-string items are dropped and a single
    /// string becomes a one-item list.
    pub fn texts<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Value::String(s) => vec![s],
            _ => Vec::new(),
        })
    }

    /// Any JSON value as a boolean; `"true"` strings and non-zero numbers count.
    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            _ => false,
        })
    }

    /// Serialize a whole-number `f64` as a JSON integer.
    pub fn whole<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            s.serialize_i64(*value as i64)
        } else {
            s.serialize_f64(*value)
        }
    }

    /// Serialize a list of whole-number `f64`s as JSON integers.
    pub fn wholes<S: Serializer>(values: &[f64], s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        struct Whole(f64);
        impl serde::Serialize for Whole {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                whole(&self.0, s)
            }
        }
        let mut seq = s.serialize_seq(Some(values.len()))?;
        for v in values {
            seq.serialize_element(&Whole(*v))?;
        }
        seq.end()
    }
}

mod analysis;
mod literary;
mod presentation;
mod request;

pub use analysis::{
    AnalysisMetadata, AnalysisResult, Animation, AnimationStyle, AnimationTiming, ColorSwatch,
    Colors, Emotion, Imagery, ImageryCategory, Layout, MovementType, ParticleKind, Particles,
    Saturation, SecondaryEmotion, Temperature, Typography, TypographyMood,
};
pub use literary::{
    Accessibility, AutoScroll, BackgroundSuggestions, LiteraryAnalysis, LiteraryMetadata,
    Metaphor, Metaphors, ReadingPace, Rhyme, RhymeTypography, Rhythm, RhythmTiming, SpeedVariations,
    Temporal, Traditional, VisualRepresentation,
};
pub use presentation::{
    ColorRecommendations, EmotionalTone, Intensity, LayoutRecommendations, PoemAnalysis,
    PoemMetadata, PoemRecord, PoetryMetrics, Theme, ThemeAnalysis, ThemeAnimations, ThemeColors,
    ThemeTypography, TypographyRecommendations, VisualEffects, VisualRecommendations,
    WordAnalysis, AnimationRecommendations,
};
pub use request::{GeneratedPoem, InvokeOptions, PoemRequest, ThemeRequest};
