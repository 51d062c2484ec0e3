//! Range clamping and defaulting for untrusted analysis data.
//!
//! [`sanitize`] and [`sanitize_literary`] are total: whatever the model
//! returned, the output has every numeric field inside its range, every
//! color as a `#rrggbb` token and every list within its size cap. Both are
//! idempotent.
//!
//! | Field | Range | Default |
//! |---|---|---|
//! | emotion intensity | `[0, 1]` | 0.5 |
//! | animation duration (ms) | `[500, 5000]` | 2000 |
//! | stagger delay (ms) | `[50, 500]` | 150 |
//! | particle density / speed | `[0.1, 1]` / `[0.1, 2]` | 0.2 / 0.5 |
//! | font weight | `[300, 900]` | 400 |
//! | font scale | `[0.8, 1.5]` | 1.0 |
//! | line height | `[1.2, 2.0]` | 1.6 |
//! | letter spacing (em) | `[-0.05, 0.2]` | 0.0 |
//! | text shadow | `[0, 4]` | 0 |
//! | spacing scale | `[0.8, 1.4]` | 1.0 |
//! | border radius / backdrop blur | `[0, 20]` | 8 / 4 |
//! | gradient angle | `[0, 360)` | 135 |
//! | color weight, opacity | `[0.1, 1]` | |
//! | confidence | `[0, 1]` | 0.5 |

use crate::tables;
use crate::types::{AnalysisResult, ColorSwatch, LiteraryAnalysis};

/// Secondary emotions kept after sanitization.
pub const MAX_SECONDARY_EMOTIONS: usize = 3;
/// Palette entries kept after sanitization.
pub const MAX_PALETTE_COLORS: usize = 5;
/// Imagery keywords kept after sanitization.
pub const MAX_KEYWORDS: usize = 10;

/// Clamp `value` into `[lo, hi]`. `NaN` becomes `default`; infinities
/// saturate to the nearer bound.
pub fn clamp(value: f64, lo: f64, hi: f64, default: f64) -> f64 {
    if value.is_nan() {
        default.clamp(lo, hi)
    } else {
        value.clamp(lo, hi)
    }
}

/// Like [`clamp`], rounded to a whole number.
pub fn clamp_whole(value: f64, lo: f64, hi: f64, default: f64) -> f64 {
    clamp(value, lo, hi, default).round()
}

/// Normalize an angle into `[0, 360)`. Non-finite input becomes `default`.
pub fn normalize_angle(value: f64, default: f64) -> f64 {
    let value = if value.is_finite() { value } else { default };
    let angle = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if angle >= 360.0 { 0.0 } else { angle }
}

fn clamp_all(values: &mut [f64], lo: f64, hi: f64) {
    for v in values {
        *v = clamp(*v, lo, hi, lo);
    }
}

fn hex_all(colors: &mut [String]) {
    for c in colors {
        *c = tables::to_hex(c);
    }
}

fn or_default(text: &mut String, default: &str) {
    if text.trim().is_empty() {
        *text = default.to_string();
    }
}

/// The palette substituted when a result carries no colors.
pub fn default_palette() -> Vec<ColorSwatch> {
    vec![
        ColorSwatch::new("#4a5568", 0.8, "primary"),
        ColorSwatch::new("#718096", 0.6, "secondary"),
        ColorSwatch::new("#a0aec0", 0.4, "accent"),
        ColorSwatch::new("#cbd5e0", 0.3, "neutral"),
        ColorSwatch::new("#e2e8f0", 0.2, "highlight"),
    ]
}

/// Bring every field of a theme analysis into range.
pub fn sanitize(mut data: AnalysisResult) -> AnalysisResult {
    let emotion = &mut data.emotion;
    or_default(&mut emotion.primary, tables::DEFAULT_EMOTION);
    emotion.intensity = clamp(emotion.intensity, 0.0, 1.0, 0.5);
    emotion.secondary.truncate(MAX_SECONDARY_EMOTIONS);
    for secondary in &mut emotion.secondary {
        secondary.intensity = clamp(secondary.intensity, 0.0, 1.0, 0.3);
    }

    let colors = &mut data.colors;
    if colors.palette.is_empty() {
        colors.palette = default_palette();
    }
    colors.palette.truncate(MAX_PALETTE_COLORS);
    for swatch in &mut colors.palette {
        swatch.hex = tables::to_hex(&swatch.hex);
        swatch.weight = clamp(swatch.weight, 0.1, 1.0, 0.5);
        or_default(&mut swatch.role, "accent");
    }

    let animation = &mut data.animation;
    let timing = &mut animation.timing;
    timing.duration_ms = clamp_whole(timing.duration_ms, 500.0, 5000.0, 2000.0);
    timing.stagger_ms = clamp_whole(timing.stagger_ms, 50.0, 500.0, 150.0);
    or_default(&mut timing.easing, "ease-out");
    let particles = &mut animation.particles;
    particles.density = clamp(particles.density, 0.1, 1.0, 0.2);
    particles.speed = clamp(particles.speed, 0.1, 2.0, 0.5);

    let imagery = &mut data.imagery;
    imagery.keywords.retain(|k| !k.trim().is_empty());
    imagery.keywords.truncate(MAX_KEYWORDS);
    imagery.density = clamp(imagery.density, 0.1, 1.0, 0.5);

    let typo = &mut data.typography;
    typo.font_weight = clamp_whole(typo.font_weight, 300.0, 900.0, 400.0);
    typo.font_scale = clamp(typo.font_scale, 0.8, 1.5, 1.0);
    typo.line_height = clamp(typo.line_height, 1.2, 2.0, 1.6);
    typo.letter_spacing = clamp(typo.letter_spacing, -0.05, 0.2, 0.0);
    typo.text_shadow = clamp_whole(typo.text_shadow, 0.0, 4.0, 0.0);

    let layout = &mut data.layout;
    layout.spacing_scale = clamp(layout.spacing_scale, 0.8, 1.4, 1.0);
    layout.border_radius = clamp(layout.border_radius, 0.0, 20.0, 8.0);
    layout.backdrop_blur = clamp(layout.backdrop_blur, 0.0, 20.0, 4.0);
    layout.gradient_angle = normalize_angle(layout.gradient_angle, 135.0);
    if layout.opacity_variations.is_empty() {
        layout.opacity_variations = vec![0.9, 0.6, 0.3];
    }
    clamp_all(&mut layout.opacity_variations, 0.1, 1.0);

    data.metadata.confidence = clamp(data.metadata.confidence, 0.0, 1.0, 0.5);

    data
}

/// Bring every field of a literary analysis into range.
///
/// Dominant and gradient colors are normalized to hex, and the metadata is
/// stamped with the list of enhanced features.
pub fn sanitize_literary(mut analysis: LiteraryAnalysis) -> LiteraryAnalysis {
    let rhyme = &mut analysis.rhyme;
    rhyme.density = clamp(rhyme.density, 0.0, 1.0, 0.0);
    rhyme.typography.line_spacing = clamp(rhyme.typography.line_spacing, 1.2, 2.0, 1.6);
    or_default(&mut rhyme.typography.font_style, "sans-serif");
    or_default(&mut rhyme.typography.text_alignment, "left");

    for representation in &mut analysis.metaphors.visual_representations {
        representation.color = tables::to_hex(&representation.color);
    }

    let timing = &mut analysis.rhythm.animation_timing;
    timing.base_duration = clamp_whole(timing.base_duration, 500.0, 5000.0, 2000.0);
    clamp_all(&mut timing.stagger_pattern, 0.0, 1000.0);
    for delay in &mut timing.stagger_pattern {
        *delay = delay.round();
    }
    or_default(&mut timing.easing_function, "ease-out");

    hex_all(&mut analysis.temporal.background_suggestions.gradient_colors);

    let pace = &mut analysis.reading_pace;
    pace.complexity_score = clamp(pace.complexity_score, 0.1, 1.0, 0.5);
    pace.average_line_length = clamp(pace.average_line_length, 0.0, f64::MAX, 8.0);
    let scroll = &mut pace.auto_scroll_timing;
    scroll.base_speed = clamp_whole(scroll.base_speed, 100.0, 500.0, 200.0);
    clamp_all(&mut scroll.pause_points, 1.0, 12.0);
    for point in &mut scroll.pause_points {
        *point = point.round();
    }

    hex_all(&mut analysis.traditional.dominant_colors);

    let metadata = &mut analysis.metadata;
    metadata.confidence = clamp(metadata.confidence, 0.0, 1.0, 0.8);
    metadata.enhanced_features = ENHANCED_FEATURES.iter().map(|f| f.to_string()).collect();

    analysis
}

/// Features advertised in literary analysis metadata.
pub const ENHANCED_FEATURES: [&str; 6] = [
    "rhyme_detection",
    "metaphor_identification",
    "rhythm_analysis",
    "temporal_detection",
    "reading_pace",
    "accessibility_descriptions",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_non_finite() {
        assert_eq!(clamp(f64::NAN, 0.0, 1.0, 0.5), 0.5);
        assert_eq!(clamp(f64::INFINITY, 0.0, 1.0, 0.5), 1.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn angles_wrap_into_range() {
        assert_eq!(normalize_angle(450.0, 135.0), 90.0);
        assert_eq!(normalize_angle(-90.0, 135.0), 270.0);
        assert_eq!(normalize_angle(360.0, 135.0), 0.0);
        assert_eq!(normalize_angle(f64::NAN, 135.0), 135.0);
        assert!(normalize_angle(-1e-20, 135.0) < 360.0);
    }

    #[test]
    fn caps_truncate_lists() {
        let mut data = AnalysisResult::default();
        data.imagery.keywords = (0..15).map(|i| format!("k{i}")).collect();
        data.colors.palette = (0..7).map(|_| ColorSwatch::default()).collect();
        let out = sanitize(data);
        assert_eq!(out.imagery.keywords.len(), MAX_KEYWORDS);
        assert_eq!(out.colors.palette.len(), MAX_PALETTE_COLORS);
    }

    #[test]
    fn empty_palette_is_filled() {
        let out = sanitize(AnalysisResult::default());
        assert_eq!(out.colors.palette, default_palette());
    }

    #[test]
    fn literary_ranges() {
        let mut analysis = LiteraryAnalysis::default();
        analysis.rhyme.density = 3.0;
        analysis.rhythm.animation_timing.base_duration = 10.0;
        analysis.rhythm.animation_timing.stagger_pattern = vec![-5.0, 2000.0, 120.4];
        analysis.reading_pace.auto_scroll_timing.pause_points = vec![0.0, 40.0];
        analysis.reading_pace.complexity_score = f64::NAN;
        analysis.traditional.dominant_colors = vec!["gold".into(), "mauve".into()];

        let out = sanitize_literary(analysis);
        assert_eq!(out.rhyme.density, 1.0);
        assert_eq!(out.rhythm.animation_timing.base_duration, 500.0);
        assert_eq!(out.rhythm.animation_timing.stagger_pattern, vec![0.0, 1000.0, 120.0]);
        assert_eq!(out.reading_pace.auto_scroll_timing.pause_points, vec![1.0, 12.0]);
        assert_eq!(out.reading_pace.complexity_score, 0.5);
        assert_eq!(out.traditional.dominant_colors, vec!["#ffd700", "#6b7280"]);
        assert_eq!(out.metadata.enhanced_features.len(), 6);
    }

    #[test]
    fn literary_sanitize_is_idempotent() {
        let mut analysis = LiteraryAnalysis::default();
        analysis.rhythm.animation_timing.stagger_pattern = vec![-1.0, 99999.0];
        let once = sanitize_literary(analysis);
        let twice = sanitize_literary(once.clone());
        assert_eq!(once, twice);
    }
}
