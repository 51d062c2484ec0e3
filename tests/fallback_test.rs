//! Deterministic fallback generation and keyword analysis.

use wordweave::fallback::{self, FIXED_ANALYSIS_NOTE, KEYWORD_ANALYSIS_NOTE, TEMPLATE_NOTE};
use wordweave::sanitize;
use wordweave::tables::{self, TemplateCategory};
use wordweave::types::{ImageryCategory, Intensity, Temperature};
use wordweave::{AnimationStyle, PoemRequest};

fn non_empty_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

// ============================================================================
// Template poems
// ============================================================================

#[test]
fn template_poem_has_twelve_lines_and_all_words() {
    for noun in ["moon", "city", "heart"] {
        let words = PoemRequest::new("whisper", "silver", noun);
        let generated = fallback::generate(&words);

        assert_eq!(non_empty_lines(&generated.poem), 12, "noun {noun}");
        assert!(generated.poem.contains("whisper"));
        assert!(generated.poem.contains("silver"));
        assert!(generated.poem.contains(noun));
    }
}

#[test]
fn template_follows_noun_category() {
    assert_eq!(tables::template_category("Moon"), TemplateCategory::Nature);
    assert_eq!(tables::template_category("street"), TemplateCategory::Urban);
    assert_eq!(tables::template_category("lantern"), TemplateCategory::Emotional);

    let nature = fallback::generate(&PoemRequest::new("glow", "soft", "forest"));
    let urban = fallback::generate(&PoemRequest::new("glow", "soft", "city"));
    let other = fallback::generate(&PoemRequest::new("glow", "soft", "lantern"));
    assert!(nature.poem.starts_with("In the soft light of dawn"));
    assert!(urban.poem.starts_with("Through soft streets"));
    assert!(other.poem.starts_with("Within the soft chambers"));
}

#[test]
fn generation_is_deterministic() {
    let words = PoemRequest::new("dance", "golden", "leaves");
    assert_eq!(fallback::generate(&words), fallback::generate(&words));
}

#[test]
fn analysis_follows_word_tables() {
    let generated = fallback::generate(&PoemRequest::new("dance", "dark", "ocean"));
    let a = &generated.analysis;

    assert_eq!(a.traditional.emotion, "mysterious");
    assert_eq!(a.traditional.dominant_colors, vec!["#2d3748", "#1a202c", "#4a5568"]);
    assert_eq!(a.rhythm.animation_style, Some(AnimationStyle::Energetic));
    assert_eq!(a.traditional.line_count, 12);
    assert_eq!(a.metadata.notes.as_deref(), Some(TEMPLATE_NOTE));
}

#[test]
fn unknown_words_use_defaults() {
    let generated = fallback::generate(&PoemRequest::new("ponder", "plaid", "teapot"));
    let a = &generated.analysis;

    assert_eq!(a.traditional.emotion, tables::DEFAULT_EMOTION);
    assert_eq!(
        a.traditional.dominant_colors,
        tables::DEFAULT_PALETTE.map(String::from).to_vec()
    );
    assert_eq!(a.rhythm.animation_style, Some(AnimationStyle::Calm));
}

#[test]
fn generated_analysis_is_sanitized() {
    let generated = fallback::generate(&PoemRequest::new("roar", "red", "sky"));
    assert_eq!(
        sanitize::sanitize_literary(generated.analysis.clone()),
        generated.analysis
    );
}

// ============================================================================
// Fixed analysis
// ============================================================================

#[test]
fn fixed_analysis_is_stable_and_in_range() {
    let fixed = fallback::fixed_analysis();
    assert_eq!(fixed.emotion.primary, "contemplative");
    assert_eq!(fixed.animation.style, AnimationStyle::Calm);
    assert_eq!(fixed.metadata.note, FIXED_ANALYSIS_NOTE);
    assert_eq!(sanitize::sanitize(fixed.clone()), fixed);
}

// ============================================================================
// Keyword analysis
// ============================================================================

#[test]
fn keyword_scoring_picks_best_emotion() {
    let analysis = fallback::analyze_text(
        "Shadows fade into a lonely memory,\nthe distant bell is lost.\nA tender heart remains.",
    );

    assert_eq!(analysis.emotion.primary, "melancholy");
    assert_eq!(analysis.colors.dominant_temperature, Temperature::Cool);
    assert_eq!(analysis.colors.palette[0].hex, "#4682b4");
    assert!(
        analysis
            .emotion
            .secondary
            .iter()
            .any(|s| s.emotion == "love")
    );
    assert_eq!(analysis.metadata.note, KEYWORD_ANALYSIS_NOTE);
}

#[test]
fn unmatched_poem_uses_scene_palette() {
    let analysis = fallback::analyze_text("The sea rolls on\nwave after wave");

    assert_eq!(analysis.emotion.primary, tables::DEFAULT_EMOTION);
    assert_eq!(analysis.imagery.category, ImageryCategory::Nature);
    assert_eq!(analysis.colors.palette[0].hex, "#4682b4");
}

#[test]
fn nothing_matched_is_abstract() {
    let analysis = fallback::analyze_text("zzz qqq");
    assert_eq!(analysis.imagery.category, ImageryCategory::Abstract);
    assert_eq!(analysis.colors.palette[0].hex, "#667eea");
    assert!(!analysis.animation.particles.enabled);
}

#[test]
fn intensity_drives_animation() {
    let high = fallback::analyze_text("A fierce and mighty storm");
    assert_eq!(high.animation.style, AnimationStyle::Dramatic);
    assert_eq!(high.animation.timing.duration_ms, 500.0);

    let low = fallback::analyze_text("quiet snow, still and soft");
    assert_eq!(low.animation.style, AnimationStyle::Calm);
    assert_eq!(low.animation.timing.duration_ms, 1200.0);
    assert_eq!(tables::emotion_intensity("calm"), Intensity::Low);
}

#[test]
fn keywords_are_unique_and_capped() {
    let analysis = fallback::analyze_text(
        "light light light, bright dawn, golden radiant dance,\n\
         sing and laugh and celebrate the forest ocean mountain sky river",
    );
    let keywords = &analysis.imagery.keywords;
    assert!(keywords.len() <= sanitize::MAX_KEYWORDS);
    let mut deduped = keywords.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), keywords.len());
}

#[test]
fn keyword_analysis_is_sanitized() {
    let analysis = fallback::analyze_text("eternal dream beyond the infinite night");
    assert_eq!(sanitize::sanitize(analysis.clone()), analysis);
}
