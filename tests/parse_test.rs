//! Decoding realistic model replies.

use wordweave::parse::{self, POEM_LINES};
use wordweave::types::{AnimationStyle, ImageryCategory};
use wordweave::{WordweaveError, sanitize};

#[test]
fn analysis_wrapped_in_prose_and_fence() {
    let raw = r##"Certainly! Here is the visual analysis you asked for:

```json
{
  "emotion": {"primary": "longing", "intensity": 0.72},
  "colors": {"palette": [{"hex": "#1E3A8A", "weight": 0.9, "role": "primary"}]},
  "animation": {"style": "mystical", "timing": {"duration": 2200}},
  "imagery": {"keywords": ["moon", "tide"], "category": "cosmic"},
  "layout": {"gradient_angle": 200}
}
```

Let me know if you'd like a different mood {or palette}."##;

    let analysis = parse::parse_analysis(raw).unwrap();
    assert_eq!(analysis.emotion.primary, "longing");
    assert_eq!(analysis.emotion.intensity, 0.72);
    assert_eq!(analysis.animation.style, AnimationStyle::Mystical);
    assert_eq!(analysis.animation.timing.duration_ms, 2200.0);
    assert_eq!(analysis.imagery.category, ImageryCategory::Cosmic);
    assert_eq!(analysis.layout.gradient_angle, 200.0);

    let clean = sanitize::sanitize(analysis);
    assert_eq!(clean.colors.palette[0].hex, "#1e3a8a");
}

#[test]
fn string_braces_do_not_end_the_object() {
    let raw = r#"{"poem": "a {curly} line\nand \"quoted\" }", "analysis": {}} and then {"noise": 1}"#;
    let generated = parse::parse_generated_poem(raw).unwrap();
    assert_eq!(generated.poem, "a {curly} line\nand \"quoted\" }");
}

#[test]
fn refusals_are_parse_errors() {
    for raw in [
        "",
        "I'm sorry, I can't write that poem.",
        "[\"not\", \"an\", \"object\"]",
        "{\"poem\": \"unterminated",
    ] {
        assert!(
            matches!(parse::parse_analysis(raw), Err(WordweaveError::Parse(_))),
            "input {raw:?}"
        );
    }
}

#[test]
fn poem_is_capped_at_twelve_lines() {
    let lines: Vec<String> = (1..=16).map(|i| format!("  line {i}  ")).collect();
    let raw = serde_json::json!({"poem": lines.join("\n\n"), "analysis": {}}).to_string();

    let generated = parse::parse_generated_poem(&raw).unwrap();
    let kept: Vec<&str> = generated.poem.lines().collect();
    assert_eq!(kept.len(), POEM_LINES);
    assert_eq!(kept[0], "line 1");
    assert_eq!(kept[11], "line 12");
}

#[test]
fn missing_analysis_takes_defaults() {
    let generated = parse::parse_generated_poem(r#"{"poem": "one line"}"#).unwrap();
    assert_eq!(generated.poem, "one line");
    assert_eq!(generated.analysis, Default::default());
}

#[test]
fn wrongly_typed_fields_decode_leniently() {
    let raw = r#"{
        "emotion": {"primary": 7, "intensity": "0.4"},
        "animation": {"style": ["calm"], "particles": {"enabled": "true"}},
        "imagery": {"keywords": "moon"}
    }"#;
    let analysis = parse::parse_analysis(raw).unwrap();
    assert_eq!(analysis.emotion.primary, "7");
    assert_eq!(analysis.emotion.intensity, 0.4);
    assert_eq!(analysis.animation.style, AnimationStyle::Calm);
    assert!(analysis.animation.particles.enabled);
    assert_eq!(analysis.imagery.keywords, vec!["moon"]);
}

#[test]
fn metadata_strings_decode_leniently() {
    let raw = r#"{
        "poem": "one line",
        "analysis": {"metadata": {"generation_time": 1.5, "model_used": null, "processing_notes": ["x"]}}
    }"#;
    let generated = parse::parse_generated_poem(raw).unwrap();
    assert_eq!(generated.analysis.metadata.generation_time.as_deref(), Some("1.5"));
    assert_eq!(generated.analysis.metadata.model_used, None);
    assert_eq!(generated.analysis.metadata.notes, None);

    let raw = r#"{"metadata": {"analysis_timestamp": 1700000000, "poem_hash": {"a": 1}, "model_used": "m"}}"#;
    let analysis = parse::parse_analysis(raw).unwrap();
    assert_eq!(analysis.metadata.analysis_timestamp.as_deref(), Some("1700000000"));
    assert_eq!(analysis.metadata.poem_hash, None);
    assert_eq!(analysis.metadata.model_used.as_deref(), Some("m"));
}
