//! Deterministic offline substitutes for model output.
//!
//! Used when the model is unreachable or its output cannot be decoded:
//!
//! - [`generate()`] builds a 12-line poem from a template chosen by the noun,
//!   with a literary analysis derived from word tables.
//! - [`fixed_analysis()`] is the constant theme analysis substituted when a
//!   model response cannot be parsed.
//! - [`analyze_text()`] scores arbitrary poem text against keyword tables.
//!
//! Every function here is total and makes no external calls.

use crate::sanitize::{sanitize, sanitize_literary};
use crate::tables::{self, TemplateCategory};
use crate::types::*;

/// Note attached to [`fixed_analysis()`].
pub const FIXED_ANALYSIS_NOTE: &str = "Fallback analysis due to parsing error";

/// Note attached to [`analyze_text()`] results.
pub const KEYWORD_ANALYSIS_NOTE: &str = "Keyword analysis fallback";

/// Note attached to template poem analyses.
pub const TEMPLATE_NOTE: &str = "Enhanced fallback with dynamic word-based generation";

// ============================================================================
// Template poems
// ============================================================================

fn render_template(category: TemplateCategory, words: &PoemRequest) -> String {
    let PoemRequest {
        verb: v,
        adjective: a,
        noun: n,
    } = words;
    match category {
        TemplateCategory::Nature => format!(
            "In the {a} light of dawn,\n\
             Where {n} {v} with grace unknown,\n\
             Through meadows where the wild winds {v},\n\
             And {a} dreams are gently sown.\n\
             \n\
             The {n} speaks in whispered tones,\n\
             Of {a} tales from times before,\n\
             While shadows {v} through ancient stones,\n\
             And secrets wait by every shore.\n\
             \n\
             O {a} {n}, forever {v},\n\
             In realms where mortal eyes can't see,\n\
             Your essence shall forever {v},\n\
             In {a} eternity."
        ),
        TemplateCategory::Urban => format!(
            "Through {a} streets the {n} moves,\n\
             In rhythms that the city {v},\n\
             Where neon lights in {a} grooves\n\
             Paint stories that the night has heard.\n\
             \n\
             The {n} {v} through concrete dreams,\n\
             Past windows where the lonely dwell,\n\
             In {a} light and midnight schemes,\n\
             With tales that only shadows tell.\n\
             \n\
             And in this {a} urban sea,\n\
             The {n} continues still to {v},\n\
             A beacon of what we could be,\n\
             In worlds where {a} spirits serve."
        ),
        TemplateCategory::Emotional => format!(
            "Within the {a} chambers of the heart,\n\
             Where {n} and soul {v} as one,\n\
             Each {a} thought, each feeling's art,\n\
             Reveals what we've become.\n\
             \n\
             The {n} {v} through memories deep,\n\
             In {a} corridors of time,\n\
             Where treasured moments softly sleep,\n\
             In rhythm and in rhyme.\n\
             \n\
             So let the {a} {n} {v},\n\
             Through pathways of the mind and soul,\n\
             And in its gentle, {a} curve,\n\
             We'll find ourselves made whole."
        ),
    }
}

/// Generate a poem and literary analysis from the three input words.
///
/// The template is chosen by [`tables::template_category`] on the noun.
/// The emotion and palette come from the adjective, the suggested
/// animation style from the verb. The analysis is sanitized.
pub fn generate(words: &PoemRequest) -> GeneratedPoem {
    let category = tables::template_category(&words.noun);
    let poem = render_template(category, words);
    let PoemRequest {
        verb,
        adjective,
        noun,
    } = words;

    let emotion = tables::adjective_emotion(adjective);
    let palette: Vec<String> = tables::adjective_palette(adjective)
        .iter()
        .map(|c| c.to_string())
        .collect();
    let style = tables::verb_style(verb);
    let word_count = poem.split_whitespace().count() as u32;
    let line_count = poem.lines().filter(|l| !l.trim().is_empty()).count() as u32;

    let analysis = LiteraryAnalysis {
        rhyme: Rhyme {
            scheme: "ABAB".to_string(),
            density: 0.8,
            typography: RhymeTypography {
                font_style: "serif".to_string(),
                line_spacing: 1.8,
                text_alignment: "left".to_string(),
            },
        },
        metaphors: Metaphors {
            identified: vec![
                Metaphor::new(1, format!("{adjective} light"), "visual"),
                Metaphor::new(3, format!("{noun} speaks"), "conceptual"),
            ],
            visual_representations: vec![VisualRepresentation {
                metaphor: format!("{adjective} light"),
                icon: "sun".to_string(),
                color: palette[0].clone(),
                animation: "glow".to_string(),
            }],
        },
        rhythm: Rhythm {
            syllable_pattern: vec![8; line_count as usize],
            stress_pattern: "iambic".to_string(),
            rhythm_type: "iambic tetrameter".to_string(),
            animation_timing: RhythmTiming {
                base_duration: 2500.0,
                stagger_pattern: vec![0.0, 200.0, 400.0, 600.0],
                easing_function: "ease-in-out".to_string(),
            },
            animation_style: Some(style),
        },
        temporal: Temporal {
            seasonal_hints: vec!["eternal".to_string()],
            time_of_day: "dawn".to_string(),
            temporal_keywords: vec!["dawn".into(), "before".into(), "forever".into()],
            background_suggestions: BackgroundSuggestions {
                gradient_colors: palette[..2].to_vec(),
                particle_effects: "sparkles".to_string(),
                lighting_mood: "warm".to_string(),
            },
        },
        reading_pace: ReadingPace {
            syllable_count: 8 * line_count,
            average_line_length: 8.0,
            complexity_score: 0.7,
            auto_scroll_timing: AutoScroll {
                base_speed: 180.0,
                pause_points: vec![4.0, 8.0, 12.0],
                speed_variations: SpeedVariations {
                    slow_sections: vec![1, 9],
                    fast_sections: vec![5],
                },
            },
        },
        accessibility: Accessibility {
            screen_reader_description: format!(
                "A contemplative poem about {adjective} {noun} that {verb} through lyrical imagery"
            ),
            poem_summary: format!(
                "An emotional journey exploring the relationship between {verb}, {adjective}, and {noun}"
            ),
            metaphor_explanations: vec![format!(
                "The {adjective} light represents hope and possibility"
            )],
            emotional_context: format!("The poem evokes {emotion} feelings through nature imagery"),
            visual_elements: "Structured verses with flowing rhythm and gentle rhyme scheme"
                .to_string(),
        },
        traditional: Traditional {
            theme: format!("{emotion} reflection"),
            mood: emotion.to_string(),
            dominant_colors: palette,
            emotion: emotion.to_string(),
            imagery_type: "lyrical".to_string(),
            word_count,
            line_count,
        },
        metadata: LiteraryMetadata {
            confidence: 0.9,
            notes: Some(TEMPLATE_NOTE.to_string()),
            ..LiteraryMetadata::default()
        },
    };

    GeneratedPoem {
        poem,
        analysis: sanitize_literary(analysis),
    }
}

// ============================================================================
// Fixed analysis
// ============================================================================

/// The constant theme analysis used when model output cannot be parsed.
pub fn fixed_analysis() -> AnalysisResult {
    AnalysisResult {
        emotion: Emotion {
            primary: "contemplative".to_string(),
            intensity: 0.5,
            secondary: vec![SecondaryEmotion::new("calm", 0.3)],
        },
        colors: Colors {
            palette: crate::sanitize::default_palette(),
            dominant_temperature: Temperature::Neutral,
            saturation: Saturation::Medium,
        },
        animation: Animation {
            style: AnimationStyle::Calm,
            timing: AnimationTiming::default(),
            movement_type: MovementType::Fade,
            particles: Particles::default(),
        },
        imagery: Imagery {
            keywords: vec!["abstract".into(), "contemplative".into(), "peaceful".into()],
            category: ImageryCategory::Abstract,
            density: 0.5,
        },
        typography: Typography::default(),
        layout: Layout::default(),
        metadata: AnalysisMetadata {
            confidence: 0.3,
            note: FIXED_ANALYSIS_NOTE.to_string(),
            ..AnalysisMetadata::default()
        },
    }
}

// ============================================================================
// Keyword analysis
// ============================================================================

fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// Derive a theme analysis from keyword matches in `poem`.
///
/// Emotions are scored by how many of their keywords occur in the text; the
/// best score wins, ties going to the earlier table entry. With no emotion
/// matched, the palette comes from the first matching scene.
pub fn analyze_text(poem: &str) -> AnalysisResult {
    let text = poem.to_lowercase();

    let mut scored: Vec<(&tables::EmotionProfile, usize)> = tables::EMOTION_PROFILES
        .iter()
        .map(|p| (p, count_hits(&text, p.keywords)))
        .filter(|(_, hits)| *hits > 0)
        .collect();
    // Stable sort keeps table order on ties.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    let total_hits: usize = scored.iter().map(|(_, hits)| hits).sum();

    let intensity = tables::INTENSITY_WORDS
        .iter()
        .find(|(_, words)| count_hits(&text, words) > 0)
        .map_or(Intensity::Medium, |(level, _)| *level);

    let scene = tables::SCENE_PROFILES
        .iter()
        .find(|s| s.keywords.is_empty() || count_hits(&text, s.keywords) > 0);

    let (primary, palette, temperature) = match scored.first() {
        Some((profile, _)) => (profile.emotion, profile.palette, profile.temperature),
        None => {
            let p = scene.map_or(["#667eea", "#764ba2", "#f093fb", "#f5576c"], |s| s.palette);
            (
                tables::DEFAULT_EMOTION,
                [p[0], p[1], p[2], p[3], "#ffffff"],
                Temperature::Neutral,
            )
        }
    };

    let secondary = scored
        .iter()
        .skip(1)
        .take(crate::sanitize::MAX_SECONDARY_EMOTIONS)
        .map(|(profile, hits)| {
            SecondaryEmotion::new(profile.emotion, *hits as f64 / total_hits.max(1) as f64)
        })
        .collect();

    let roles = ["primary", "secondary", "accent", "neutral", "highlight"];
    let weights = [0.8, 0.6, 0.5, 0.3, 0.2];
    let palette = palette
        .iter()
        .zip(roles)
        .zip(weights)
        .map(|((hex, role), weight)| ColorSwatch::new(*hex, weight, role))
        .collect();

    let candidates = tables::EMOTION_PROFILES
        .iter()
        .flat_map(|p| p.keywords.iter())
        .chain(tables::THEME_WORDS.iter().flat_map(|(_, words)| words.iter()));
    let mut keywords: Vec<String> = Vec::new();
    for keyword in candidates {
        if text.contains(keyword) && !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    }

    let themes = tables::THEME_WORDS
        .iter()
        .filter(|(_, words)| count_hits(&text, words) > 0)
        .count();

    let (style, duration, stagger, easing, emotion_intensity) = match intensity {
        Intensity::High => (AnimationStyle::Dramatic, 500.0, 50.0, "ease-out", 0.8),
        Intensity::Medium => match primary {
            "joy" | "passion" => (AnimationStyle::Energetic, 800.0, 100.0, "ease-in-out", 0.5),
            "wonder" => (AnimationStyle::Mystical, 800.0, 100.0, "ease-in-out", 0.5),
            _ => (AnimationStyle::Calm, 800.0, 100.0, "ease-in-out", 0.5),
        },
        Intensity::Low => (AnimationStyle::Calm, 1200.0, 150.0, "ease-in", 0.3),
    };

    let lines = poem.lines().filter(|l| !l.trim().is_empty()).count();

    let result = AnalysisResult {
        emotion: Emotion {
            primary: primary.to_string(),
            intensity: emotion_intensity,
            secondary,
        },
        colors: Colors {
            palette,
            dominant_temperature: temperature,
            saturation: Saturation::Medium,
        },
        animation: Animation {
            style,
            timing: AnimationTiming {
                duration_ms: duration,
                stagger_ms: stagger,
                easing: easing.to_string(),
            },
            movement_type: if style == AnimationStyle::Mystical {
                MovementType::Float
            } else {
                MovementType::Fade
            },
            particles: Particles {
                enabled: !keywords.is_empty(),
                ..Particles::default()
            },
        },
        imagery: Imagery {
            category: scene.map_or(ImageryCategory::Abstract, |s| s.category),
            density: (0.3 + 0.1 * (keywords.len() + themes) as f64).min(1.0),
            keywords,
        },
        typography: Typography {
            mood: if text.contains("ancient") {
                TypographyMood::Classic
            } else {
                TypographyMood::Modern
            },
            ..Typography::default()
        },
        layout: Layout {
            spacing_scale: if lines > 8 { 1.0 } else { 1.2 },
            ..Layout::default()
        },
        metadata: AnalysisMetadata {
            confidence: 0.5,
            note: KEYWORD_ANALYSIS_NOTE.to_string(),
            ..AnalysisMetadata::default()
        },
    };
    sanitize(result)
}
