//! Reshaping of literary analysis into the frontend presentation schema.
//!
//! All functions are pure. [`poem_metadata`] takes its id as an argument;
//! [`poem_id`] generates one.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::tables;
use crate::types::*;

/// Colors used when the analysis carries fewer dominant colors.
const DEFAULT_COLORS: [&str; 4] = ["#6b7280", "#9ca3af", "#d1d5db", "#f3f4f6"];

fn color_or(colors: &[String], index: usize) -> String {
    colors
        .get(index)
        .cloned()
        .unwrap_or_else(|| DEFAULT_COLORS[index].to_string())
}

/// Animation style for a literary analysis.
///
/// A style suggested by the fallback generator wins. Otherwise a rhythm type
/// of exactly iambic or trochaic is energetic, a dramatic or intense mood
/// is dramatic, a mysterious or ethereal mood is mystical, and anything
/// else is calm.
pub fn animation_style(analysis: &LiteraryAnalysis) -> AnimationStyle {
    if let Some(style) = analysis.rhythm.animation_style {
        return style;
    }
    let rhythm = analysis.rhythm.rhythm_type.trim().to_lowercase();
    let mood = analysis.traditional.mood.trim().to_lowercase();
    if matches!(rhythm.as_str(), "iambic" | "trochaic") {
        AnimationStyle::Energetic
    } else if matches!(mood.as_str(), "dramatic" | "intense") {
        AnimationStyle::Dramatic
    } else if matches!(mood.as_str(), "mysterious" | "ethereal") {
        AnimationStyle::Mystical
    } else {
        AnimationStyle::Calm
    }
}

/// Visual effect flags derived from mood, emotion, intensity and gradient.
pub fn visual_effects(
    mood: &str,
    emotion: &str,
    intensity: Intensity,
    gradient_stops: usize,
) -> VisualEffects {
    let mood = mood.trim().to_lowercase();
    let emotion = emotion.trim().to_lowercase();
    VisualEffects {
        blur: matches!(mood.as_str(), "ethereal" | "dreamy" | "mysterious"),
        glow: matches!(emotion.as_str(), "hopeful" | "magical" | "wonder" | "love"),
        shadow: intensity == Intensity::High || matches!(mood.as_str(), "dramatic" | "intense"),
        gradient: gradient_stops > 2,
    }
}

/// Map a literary analysis to the presentation schema.
pub fn to_presentation(analysis: &LiteraryAnalysis, words: &PoemRequest) -> PoemAnalysis {
    let traditional = &analysis.traditional;
    let rhythm = &analysis.rhythm;
    let typography = &analysis.rhyme.typography;

    let dominant = &traditional.dominant_colors;
    let suggested = &analysis.temporal.background_suggestions.gradient_colors;
    let gradient: Vec<String> = if suggested.is_empty() {
        (0..3).map(|i| color_or(dominant, i)).collect()
    } else {
        suggested.clone()
    };

    let emotion = traditional.emotion.clone();
    let mood = traditional.mood.clone();
    let intensity = tables::emotion_intensity(&emotion);

    let mut scores = BTreeMap::new();
    scores.insert(emotion.clone(), 0.8);
    let secondary = if mood != emotion {
        scores.insert(mood.clone(), 0.6);
        Some(mood.clone())
    } else {
        None
    };

    let timing = &rhythm.animation_timing;
    let stagger = timing.stagger_pattern.get(1).copied().unwrap_or(150.0);

    PoemAnalysis {
        theme_analysis: ThemeAnalysis {
            emotional_tone: EmotionalTone {
                primary: emotion.clone(),
                secondary,
                intensity,
                scores,
            },
            themes: vec![traditional.theme.clone()],
            literary_devices: analysis.metaphors.identified.clone(),
            word_analysis: WordAnalysis {
                original: words.clone(),
                enhanced: words.clone(),
                transformation_quality: "moderate".to_string(),
            },
        },
        visual_recommendations: VisualRecommendations {
            colors: ColorRecommendations {
                primary: color_or(dominant, 0),
                secondary: color_or(dominant, 1),
                accent: color_or(dominant, 2),
                background: color_or(dominant, 3),
                gradient: gradient.clone(),
            },
            typography: TypographyRecommendations {
                font_family: typography.font_style.clone(),
                font_weight: if mood.eq_ignore_ascii_case("reflective") {
                    "400"
                } else {
                    "500"
                }
                .to_string(),
                letter_spacing: "normal".to_string(),
                line_height: typography.line_spacing,
                font_size: "medium".to_string(),
            },
            animations: AnimationRecommendations {
                duration: timing.base_duration,
                easing: timing.easing_function.clone(),
                stagger,
                style: animation_style(analysis),
            },
            layout: LayoutRecommendations {
                style: "centered".to_string(),
                alignment: typography.text_alignment.clone(),
                spacing: "normal".to_string(),
            },
            effects: visual_effects(&mood, &emotion, intensity, gradient.len()),
        },
        poetry_metrics: PoetryMetrics {
            readability_score: 0.85,
            emotional_impact: if intensity == Intensity::High { 0.7 } else { 0.5 },
            creativity_index: 0.75,
            coherence_score: 0.9,
        },
    }
}

/// Typography mood implied by a font family name.
pub fn typography_mood(font_family: &str) -> TypographyMood {
    let family = font_family.trim().to_lowercase();
    if matches!(family.as_str(), "serif" | "georgia" | "times") {
        TypographyMood::Classic
    } else if family.contains("playful") || family.contains("comic") {
        TypographyMood::Playful
    } else if family.contains("elegant") || family.contains("script") {
        TypographyMood::Elegant
    } else {
        TypographyMood::Modern
    }
}

/// Derive the simplified [`Theme`] from a presentation analysis.
///
/// A gradient with fewer than two stops is replaced by the primary,
/// secondary and accent colors; longer gradients keep their first three.
pub fn simple_theme(analysis: &PoemAnalysis) -> Theme {
    let recs = &analysis.visual_recommendations;
    let colors = &recs.colors;
    let gradient = if colors.gradient.len() < 2 {
        vec![
            colors.primary.clone(),
            colors.secondary.clone(),
            colors.accent.clone(),
        ]
    } else {
        colors.gradient.iter().take(3).cloned().collect()
    };

    Theme {
        colors: ThemeColors {
            primary: colors.primary.clone(),
            secondary: colors.secondary.clone(),
            accent: colors.accent.clone(),
            background: colors.background.clone(),
            gradient,
        },
        animations: ThemeAnimations {
            style: recs.animations.style,
            duration: recs.animations.duration,
            stagger: recs.animations.stagger,
        },
        typography: ThemeTypography {
            mood: typography_mood(&recs.typography.font_family),
            scale: 1.0,
        },
    }
}

/// A fresh poem id: `poem-{unix seconds}-{8 hex chars}`.
pub fn poem_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("poem-{}-{}", chrono::Utc::now().timestamp(), &uuid[..8])
}

/// Build the poem metadata block.
pub fn poem_metadata(
    id: String,
    poem: &str,
    analysis: &PoemAnalysis,
    elapsed: Duration,
) -> PoemMetadata {
    let emotion = analysis.theme_analysis.emotional_tone.primary.clone();
    PoemMetadata {
        id,
        word_count: poem.split_whitespace().count(),
        sentiment: emotion.clone(),
        emotion,
        generation_time: (elapsed.as_secs_f64() * 1000.0).round() / 1000.0,
    }
}

/// Assemble a complete [`PoemRecord`] from a generated poem.
pub fn build_record(
    generated: GeneratedPoem,
    words: &PoemRequest,
    id: String,
    elapsed: Duration,
) -> PoemRecord {
    let analysis = to_presentation(&generated.analysis, words);
    let theme = simple_theme(&analysis);
    let metadata = poem_metadata(id, &generated.poem, &analysis, elapsed);
    PoemRecord {
        poem: generated.poem,
        analysis,
        theme,
        metadata,
    }
}
