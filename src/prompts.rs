//! Prompt templates sent to the model.
//!
//! Each prompt describes the exact JSON shape the parser expects. Templates
//! are plain strings with `{{name}}` placeholders.

use crate::types::{InvokeOptions, PoemRequest};

/// Sampling options for poem generation.
pub fn generation_options() -> InvokeOptions {
    InvokeOptions::new(4000).temperature(0.6).top_p(0.9)
}

/// Sampling options for theme analysis.
pub fn analysis_options() -> InvokeOptions {
    InvokeOptions::new(3000).temperature(0.3).top_p(0.9)
}

const GENERATION_TEMPLATE: &str = r##"<poem_generation_task>
  <role>
    You write poems and then analyse them closely: rhyme scheme, figurative
    language, meter, temporal and seasonal cues, reading pace and
    accessibility.
  </role>

  <input_words>
    <verb>{{verb}}</verb>
    <adjective>{{adjective}}</adjective>
    <noun>{{noun}}</noun>
  </input_words>

  <poem_requirements>
    Exactly 12 lines of free verse. Use all three words naturally. Favour
    vivid sensory imagery, at least one metaphor, and varied line lengths.
  </poem_requirements>

  <analysis_requirements>
    rhyme: scheme (AABB, ABAB, ABCB or "free verse"), density 0.0-1.0, and
      typography (font_style "serif" for formal rhyme or "sans-serif" for
      free verse, line_spacing 1.2-2.0, text_alignment left|center|justify).
    metaphors: every metaphor with its line number and type
      (visual|conceptual|sensory|abstract), plus a suggested icon, hex color
      and animation for each.
    rhythm: syllables per line, stress pattern
      (iambic|trochaic|anapestic|dactylic|free), rhythm type, and animation
      timing (base_duration 500-5000 ms, stagger_pattern in ms, CSS easing).
    temporal: seasonal hints, time of day, time-related keywords, and
      background suggestions (gradient hex colors, particle effect, lighting
      mood).
    reading_pace: total syllables, average syllables per line, complexity
      0.1-1.0, and auto-scroll timing (base_speed 100-500 words per minute,
      pause_points as line numbers 1-12, slow and fast sections).
    accessibility: a screen reader description, a summary, plain-language
      metaphor explanations, the emotional journey, and a description of the
      visual elements.
    traditional: theme, mood, five dominant hex colors, primary emotion,
      imagery type, word count and line count.
  </analysis_requirements>

  <output_format>
    Respond with ONLY this JSON object:
    {
      "poem": "line 1\nline 2\n...\nline 12",
      "analysis": {
        "rhyme": {
          "scheme": "ABAB",
          "density": 0.6,
          "typography": {"font_style": "serif", "line_spacing": 1.6, "text_alignment": "left"}
        },
        "metaphors": {
          "identified": [{"line": 1, "text": "metaphor phrase", "type": "visual"}],
          "visual_representations": [
            {"metaphor": "metaphor phrase", "icon": "icon_name", "color": "#4a5568", "animation": "glow"}
          ]
        },
        "rhythm": {
          "syllable_pattern": [8, 9, 7, 8, 9, 7, 8, 9, 7, 8, 9, 7],
          "stress_pattern": "iambic",
          "rhythm_type": "iambic tetrameter",
          "animation_timing": {"base_duration": 2000, "stagger_pattern": [0, 150, 300, 450], "easing_function": "ease-out"}
        },
        "temporal": {
          "seasonal_hints": ["autumn"],
          "time_of_day": "dusk",
          "temporal_keywords": ["evening"],
          "background_suggestions": {"gradient_colors": ["#ff6b6b", "#4ecdc4"], "particle_effects": "leaves", "lighting_mood": "warm"}
        },
        "reading_pace": {
          "syllable_count": 96,
          "average_line_length": 8.0,
          "complexity_score": 0.6,
          "auto_scroll_timing": {
            "base_speed": 200,
            "pause_points": [3, 7, 11],
            "speed_variations": {"slow_sections": [1, 2], "fast_sections": [8, 9]}
          }
        },
        "accessibility": {
          "screen_reader_description": "...",
          "poem_summary": "...",
          "metaphor_explanations": ["..."],
          "emotional_context": "...",
          "visual_elements": "..."
        },
        "traditional": {
          "theme": "...",
          "mood": "...",
          "dominant_colors": ["#111111", "#222222", "#333333", "#444444", "#555555"],
          "emotion": "...",
          "imagery_type": "...",
          "word_count": 72,
          "line_count": 12
        }
      }
    }
  </output_format>
</poem_generation_task>

Write the poem and its analysis for the words: {{verb}}, {{adjective}}, {{noun}}."##;

const ANALYSIS_TEMPLATE: &str = r##"<visual_theme_analysis>
  <role>
    You are a visual designer turning a poem into precise, quantified
    parameters for CSS styling and web animation.
  </role>

  <poem>
{{poem}}
  </poem>

  <requirements>
    emotion: the dominant emotion, intensity 0.0-1.0, and up to 3 secondary
      emotions with intensities.
    colors: 5 hex colors with weights 0.1-1.0 and roles, the dominant
      temperature (warm|cool|neutral) and saturation level (high|medium|low).
    animation: style (calm|energetic|dramatic|mystical), duration 500-5000
      ms, stagger_delay 50-500 ms, a CSS easing, movement_type
      (fade|slide|bounce|float|pulse|wave|spiral|zoom) and particles
      (enabled, type sparkles|leaves|rain|snow|bubbles|light_rays|dust|fireflies,
      density 0.1-1.0, speed 0.1-2.0).
    imagery: at most 10 concrete visual keywords, a category
      (nature|urban|cosmic|abstract|human|architectural|elemental) and
      visual_density 0.1-1.0.
    typography: mood (modern|classic|playful|elegant), font_weight 300-900,
      font_scale 0.8-1.5, line_height 1.2-2.0, letter_spacing -0.05-0.2 em,
      text_shadow 0-4.
    layout: spacing_scale 0.8-1.4, border_radius 0-20 px, backdrop_blur 0-20
      px, gradient_angle 0-360 degrees, and 3 opacity_variations 0.1-1.0.
  </requirements>

  <output_format>
    Respond with ONLY this JSON object:
    {
      "emotion": {"primary": "wonder", "intensity": 0.75, "secondary": [{"emotion": "calm", "intensity": 0.4}]},
      "colors": {
        "palette": [
          {"hex": "#1a202c", "weight": 0.8, "role": "primary"},
          {"hex": "#2d3748", "weight": 0.6, "role": "secondary"},
          {"hex": "#4a5568", "weight": 0.5, "role": "accent"},
          {"hex": "#718096", "weight": 0.3, "role": "neutral"},
          {"hex": "#e2e8f0", "weight": 0.2, "role": "highlight"}
        ],
        "dominant_temperature": "cool",
        "saturation_level": "medium"
      },
      "animation": {
        "style": "mystical",
        "timing": {"duration": 2000, "stagger_delay": 150, "easing": "ease-out"},
        "movement_type": "fade",
        "particles": {"enabled": true, "type": "sparkles", "density": 0.3, "speed": 0.8}
      },
      "imagery": {"keywords": ["stars", "ocean"], "category": "cosmic", "visual_density": 0.7},
      "typography": {"mood": "elegant", "font_weight": 400, "font_scale": 1.1, "line_height": 1.6, "letter_spacing": 0.02, "text_shadow": 1},
      "layout": {"spacing_scale": 1.2, "border_radius": 12, "backdrop_blur": 8, "gradient_angle": 135, "opacity_variations": [0.9, 0.6, 0.3]},
      "metadata": {"analysis_confidence": 0.85, "processing_notes": "one sentence on the approach"}
    }
  </output_format>
</visual_theme_analysis>

Analyse the poem and return the visual parameters."##;

/// Prompt asking for a 12-line poem and its literary analysis.
pub fn generation_prompt(words: &PoemRequest) -> String {
    GENERATION_TEMPLATE
        .replace("{{verb}}", &words.verb)
        .replace("{{adjective}}", &words.adjective)
        .replace("{{noun}}", &words.noun)
}

/// Prompt asking for a visual theme analysis of `poem`.
pub fn analysis_prompt(poem: &str) -> String {
    ANALYSIS_TEMPLATE.replace("{{poem}}", poem)
}
