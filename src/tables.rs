//! Static lookup tables.
//!
//! Color names, keyword lists and word mappings used by the sanitizer, the
//! fallback generator and the keyword analysis. Everything here is
//! read-only after first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::{AnimationStyle, ImageryCategory, Intensity, Temperature};

/// Neutral gray substituted for unknown color tokens.
pub const DEFAULT_GRAY: &str = "#6b7280";

/// Palette used when an adjective has no entry in [`ADJECTIVE_PALETTES`].
pub const DEFAULT_PALETTE: [&str; 3] = ["#6b7280", "#9ca3af", "#d1d5db"];

/// Emotion used when an adjective has no entry in [`ADJECTIVE_EMOTIONS`].
pub const DEFAULT_EMOTION: &str = "contemplative";

// ============================================================================
// Colors
// ============================================================================

const COLOR_NAMES: &[(&str, &str)] = &[
    ("red", "#dc2626"),
    ("crimson", "#dc143c"),
    ("scarlet", "#ff2400"),
    ("blue", "#2563eb"),
    ("navy", "#000080"),
    ("azure", "#007fff"),
    ("green", "#16a34a"),
    ("emerald", "#059669"),
    ("forest", "#228b22"),
    ("yellow", "#ca8a04"),
    ("gold", "#ffd700"),
    ("amber", "#f59e0b"),
    ("purple", "#9333ea"),
    ("violet", "#8b5cf6"),
    ("indigo", "#4f46e5"),
    ("orange", "#ea580c"),
    ("coral", "#ff7f50"),
    ("salmon", "#fa8072"),
    ("pink", "#ec4899"),
    ("rose", "#f43f5e"),
    ("magenta", "#d946ef"),
    ("brown", "#a16207"),
    ("tan", "#d2b48c"),
    ("beige", "#f5f5dc"),
    ("gray", "#6b7280"),
    ("grey", "#6b7280"),
    ("silver", "#c0c0c0"),
    ("black", "#1f2937"),
    ("white", "#f9fafb"),
    ("teal", "#0d9488"),
    ("cyan", "#0891b2"),
    ("lime", "#65a30d"),
];

static COLOR_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COLOR_NAMES.iter().copied().collect());

/// Every known color name with its hex code.
pub fn color_names() -> &'static [(&'static str, &'static str)] {
    COLOR_NAMES
}

/// Hex code for a color name (case-insensitive, trimmed).
pub fn color_hex(name: &str) -> Option<&'static str> {
    COLOR_MAP.get(name.trim().to_lowercase().as_str()).copied()
}

/// Whether `token` is a `#rrggbb` hex color.
pub fn is_hex_color(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Normalize a color token to lowercase `#rrggbb`.
///
/// Hex codes are kept, known names are mapped through the color table and
/// anything else becomes [`DEFAULT_GRAY`].
pub fn to_hex(token: &str) -> String {
    let token = token.trim();
    if is_hex_color(token) {
        token.to_ascii_lowercase()
    } else {
        color_hex(token).unwrap_or(DEFAULT_GRAY).to_string()
    }
}

// ============================================================================
// Fallback word tables
// ============================================================================

/// Template family chosen from the noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Nature,
    Urban,
    Emotional,
}

const NATURE_NOUNS: &[&str] = &[
    "nature", "forest", "ocean", "mountain", "sky", "moon", "star", "sun", "flower", "tree",
];

const URBAN_NOUNS: &[&str] = &[
    "city", "street", "building", "light", "sound", "music", "car", "phone", "computer",
];

/// Template family for a noun. Pure function of the lowercased noun.
pub fn template_category(noun: &str) -> TemplateCategory {
    let noun = noun.trim().to_lowercase();
    if NATURE_NOUNS.contains(&noun.as_str()) {
        TemplateCategory::Nature
    } else if URBAN_NOUNS.contains(&noun.as_str()) {
        TemplateCategory::Urban
    } else {
        TemplateCategory::Emotional
    }
}

const ADJECTIVE_EMOTIONS: &[(&str, &str)] = &[
    ("dark", "mysterious"),
    ("bright", "joyful"),
    ("sad", "melancholy"),
    ("happy", "euphoric"),
    ("calm", "peaceful"),
    ("wild", "energetic"),
    ("gentle", "serene"),
    ("fierce", "intense"),
    ("ancient", "nostalgic"),
    ("new", "hopeful"),
    ("old", "contemplative"),
    ("young", "vibrant"),
    ("deep", "profound"),
    ("light", "ethereal"),
    ("heavy", "somber"),
    ("soft", "tender"),
];

/// Emotion label evoked by an adjective.
pub fn adjective_emotion(adjective: &str) -> &'static str {
    let adjective = adjective.trim().to_lowercase();
    ADJECTIVE_EMOTIONS
        .iter()
        .find(|(a, _)| *a == adjective)
        .map_or(DEFAULT_EMOTION, |&(_, e)| e)
}

const ADJECTIVE_PALETTES: &[(&str, [&str; 3])] = &[
    ("dark", ["#2d3748", "#1a202c", "#4a5568"]),
    ("bright", ["#fbbf24", "#f59e0b", "#d97706"]),
    ("blue", ["#3182ce", "#2b77e0", "#1e40af"]),
    ("red", ["#e53e3e", "#c53030", "#9b2c2c"]),
    ("green", ["#38a169", "#2f855a", "#276749"]),
    ("purple", ["#805ad5", "#6b46c1", "#553c9a"]),
    ("gold", ["#d69e2e", "#b7791f", "#975a16"]),
    ("silver", ["#a0aec0", "#718096", "#4a5568"]),
];

/// Three-color palette evoked by an adjective.
pub fn adjective_palette(adjective: &str) -> [&'static str; 3] {
    let adjective = adjective.trim().to_lowercase();
    ADJECTIVE_PALETTES
        .iter()
        .find(|(a, _)| *a == adjective)
        .map_or(DEFAULT_PALETTE, |(_, p)| *p)
}

const VERB_STYLES: &[(&[&str], AnimationStyle)] = &[
    (
        &["dance", "leap", "rush", "race", "fly"],
        AnimationStyle::Energetic,
    ),
    (
        &["whisper", "glide", "flow", "drift"],
        AnimationStyle::Mystical,
    ),
    (
        &["thunder", "crash", "roar", "strike"],
        AnimationStyle::Dramatic,
    ),
];

/// Animation style suggested by a verb, calm when unknown.
pub fn verb_style(verb: &str) -> AnimationStyle {
    let verb = verb.trim().to_lowercase();
    VERB_STYLES
        .iter()
        .find(|(verbs, _)| verbs.contains(&verb.as_str()))
        .map_or(AnimationStyle::Calm, |(_, style)| *style)
}

/// Intensity bucket of an emotion label.
pub fn emotion_intensity(emotion: &str) -> Intensity {
    match emotion.trim().to_lowercase().as_str() {
        "intense" | "passionate" | "angry" | "excited" => Intensity::High,
        "calm" | "peaceful" => Intensity::Low,
        _ => Intensity::Medium,
    }
}

// ============================================================================
// Keyword analysis tables
// ============================================================================

/// An emotion recognised by keyword scoring, with its presentation traits.
#[derive(Debug, Clone, Copy)]
pub struct EmotionProfile {
    pub emotion: &'static str,
    pub keywords: &'static [&'static str],
    /// primary, secondary, accent, neutral, background.
    pub palette: [&'static str; 5],
    pub temperature: Temperature,
}

pub const EMOTION_PROFILES: &[EmotionProfile] = &[
    EmotionProfile {
        emotion: "joy",
        keywords: &["bright", "light", "dance", "sing", "laugh", "celebrate", "golden", "radiant"],
        palette: ["#ffd700", "#ffa500", "#ff6347", "#ff8c00", "#fffaf0"],
        temperature: Temperature::Warm,
    },
    EmotionProfile {
        emotion: "melancholy",
        keywords: &["shadow", "fade", "whisper", "lonely", "distant", "memory", "lost"],
        palette: ["#4682b4", "#708090", "#b0c4de", "#e6e6fa", "#f8f8ff"],
        temperature: Temperature::Cool,
    },
    EmotionProfile {
        emotion: "wonder",
        keywords: &["mystery", "magic", "ancient", "eternal", "infinite", "beyond", "dream"],
        palette: ["#9370db", "#8a2be2", "#dda0dd", "#ba55d3", "#f5f0ff"],
        temperature: Temperature::Cool,
    },
    EmotionProfile {
        emotion: "peace",
        keywords: &["gentle", "calm", "serene", "quiet", "still", "soft", "tranquil"],
        palette: ["#98fb98", "#90ee90", "#32cd32", "#228b22", "#f0fff0"],
        temperature: Temperature::Neutral,
    },
    EmotionProfile {
        emotion: "passion",
        keywords: &["fire", "burn", "intense", "deep", "powerful", "strong", "fierce"],
        palette: ["#dc143c", "#b22222", "#ff69b4", "#cd5c5c", "#fff0f5"],
        temperature: Temperature::Warm,
    },
    EmotionProfile {
        emotion: "nostalgia",
        keywords: &["old", "time", "remember", "past", "echo", "fading", "once"],
        palette: ["#d2b48c", "#bc8f8f", "#f4a460", "#deb887", "#fdf5e6"],
        temperature: Temperature::Warm,
    },
    EmotionProfile {
        emotion: "hope",
        keywords: &["new", "dawn", "rise", "grow", "bloom", "future", "tomorrow"],
        palette: ["#87ceeb", "#87cefa", "#00bfff", "#1e90ff", "#f0f8ff"],
        temperature: Temperature::Cool,
    },
    EmotionProfile {
        emotion: "love",
        keywords: &["heart", "embrace", "tender", "warm", "cherish", "beloved", "dear"],
        palette: ["#ff69b4", "#ffb6c1", "#ff1493", "#dc143c", "#fff0f5"],
        temperature: Temperature::Warm,
    },
];

/// Intensity words, checked high first.
pub const INTENSITY_WORDS: &[(Intensity, &[&str])] = &[
    (
        Intensity::High,
        &["powerful", "intense", "fierce", "blazing", "thunderous", "mighty"],
    ),
    (
        Intensity::Medium,
        &["gentle", "flowing", "dancing", "singing", "glowing", "shining"],
    ),
    (
        Intensity::Low,
        &["whisper", "soft", "quiet", "still", "peaceful", "calm"],
    ),
];

/// Theme words by theme name.
pub const THEME_WORDS: &[(&str, &[&str])] = &[
    (
        "nature",
        &["forest", "ocean", "mountain", "sky", "earth", "tree", "flower", "river"],
    ),
    (
        "temporal",
        &["night", "day", "dawn", "dusk", "season", "eternal", "moment", "time"],
    ),
    (
        "spiritual",
        &["soul", "spirit", "divine", "sacred", "prayer", "blessing", "grace"],
    ),
    (
        "journey",
        &["path", "road", "journey", "travel", "explore", "discover", "quest"],
    ),
];

/// A scene recognised from poem keywords when no emotion scores.
#[derive(Debug, Clone, Copy)]
pub struct SceneProfile {
    pub keywords: &'static [&'static str],
    pub palette: [&'static str; 4],
    pub category: ImageryCategory,
}

/// Scene palettes, checked in order; the last entry has no keywords and
/// always matches.
pub const SCENE_PROFILES: &[SceneProfile] = &[
    SceneProfile {
        keywords: &["night", "star", "moon", "dark"],
        palette: ["#191970", "#4169e1", "#6495ed", "#87cefa"],
        category: ImageryCategory::Cosmic,
    },
    SceneProfile {
        keywords: &["sun", "gold", "bright", "light"],
        palette: ["#ffd700", "#ffa500", "#ff8c00", "#ff6347"],
        category: ImageryCategory::Elemental,
    },
    SceneProfile {
        keywords: &["ocean", "sea", "water", "wave"],
        palette: ["#4682b4", "#87ceeb", "#b0e0e6", "#e0f6ff"],
        category: ImageryCategory::Nature,
    },
    SceneProfile {
        keywords: &["forest", "tree", "green", "nature"],
        palette: ["#228b22", "#32cd32", "#8fbc8f", "#98fb98"],
        category: ImageryCategory::Nature,
    },
    SceneProfile {
        keywords: &[],
        palette: ["#667eea", "#764ba2", "#f093fb", "#f5576c"],
        category: ImageryCategory::Abstract,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_name_maps_to_hex() {
        for (name, hex) in color_names() {
            assert!(is_hex_color(hex), "{name} -> {hex}");
            assert_eq!(to_hex(name), *hex);
        }
    }

    #[test]
    fn color_names_are_case_insensitive() {
        assert_eq!(to_hex("  Crimson "), "#dc143c");
    }

    #[test]
    fn unknown_color_maps_to_gray() {
        assert_eq!(to_hex("octarine"), DEFAULT_GRAY);
        assert_eq!(to_hex("#12345"), DEFAULT_GRAY);
        assert_eq!(to_hex(""), DEFAULT_GRAY);
    }

    #[test]
    fn hex_colors_are_kept_lowercased() {
        assert_eq!(to_hex("#A1B2C3"), "#a1b2c3");
    }

    #[test]
    fn template_category_by_noun() {
        assert_eq!(template_category("Ocean"), TemplateCategory::Nature);
        assert_eq!(template_category("city"), TemplateCategory::Urban);
        assert_eq!(template_category("leaves"), TemplateCategory::Emotional);
    }

    #[test]
    fn word_lookups_have_defaults() {
        assert_eq!(adjective_emotion("dark"), "mysterious");
        assert_eq!(adjective_emotion("golden"), DEFAULT_EMOTION);
        assert_eq!(adjective_palette("golden"), DEFAULT_PALETTE);
        assert_eq!(verb_style("dance"), AnimationStyle::Energetic);
        assert_eq!(verb_style("roar"), AnimationStyle::Dramatic);
        assert_eq!(verb_style("sleep"), AnimationStyle::Calm);
    }

    #[test]
    fn intensity_buckets() {
        assert_eq!(emotion_intensity("passionate"), Intensity::High);
        assert_eq!(emotion_intensity("peaceful"), Intensity::Low);
        assert_eq!(emotion_intensity("wonder"), Intensity::Medium);
    }

    #[test]
    fn last_scene_matches_everything() {
        let last = SCENE_PROFILES.last().unwrap();
        assert!(last.keywords.is_empty());
    }
}
