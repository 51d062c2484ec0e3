//! Request body validation.
//!
//! Checks a decoded JSON body for the fields each endpoint requires. Fields
//! are checked in a fixed order and the first problem found is reported.

use serde_json::{Map, Value};

use crate::types::{PoemRequest, ThemeRequest};

/// Maximum length of a single input word, in characters after trimming.
pub const MAX_WORD_CHARS: usize = 50;

/// Maximum length of a poem submitted for analysis, in characters after trimming.
pub const MAX_POEM_CHARS: usize = 5000;

/// Required generation fields, in the order they are checked.
pub const GENERATION_FIELDS: [&str; 3] = ["verb", "adjective", "noun"];

/// Machine-readable validation failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCode {
    MissingBody,
    InvalidJson,
    MissingField,
    MissingPoem,
    InvalidType,
    EmptyField,
    EmptyPoem,
    FieldTooLong,
    PoemTooLong,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::MissingBody => "MISSING_BODY",
            ValidationCode::InvalidJson => "INVALID_JSON",
            ValidationCode::MissingField => "MISSING_FIELD",
            ValidationCode::MissingPoem => "MISSING_POEM",
            ValidationCode::InvalidType => "INVALID_TYPE",
            ValidationCode::EmptyField => "EMPTY_FIELD",
            ValidationCode::EmptyPoem => "EMPTY_POEM",
            ValidationCode::FieldTooLong => "FIELD_TOO_LONG",
            ValidationCode::PoemTooLong => "POEM_TOO_LONG",
        }
    }
}

impl std::fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client input problem. Always reported as HTTP 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ValidationError {
    pub code: ValidationCode,
    /// Offending field, if the problem is field-specific.
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(code: ValidationCode, field: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            field: Some(field.to_string()),
            message: message.into(),
        }
    }

    pub fn missing_body() -> Self {
        Self::new(ValidationCode::MissingBody, "Request body is required")
    }

    pub fn invalid_json() -> Self {
        Self::new(ValidationCode::InvalidJson, "Request body must be valid JSON")
    }
}

/// Decode a raw request body into a JSON object.
///
/// An empty body is `MISSING_BODY`; anything that is not a JSON object is
/// `INVALID_JSON`.
pub fn parse_body(raw: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::missing_body());
    }
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ValidationError::invalid_json()),
    }
}

/// Validate a poem generation body.
///
/// Requires `verb`, `adjective` and `noun` as non-empty strings of at most
/// [`MAX_WORD_CHARS`] characters. The returned words are trimmed and
/// lowercased.
pub fn validate_generation(body: &Map<String, Value>) -> Result<PoemRequest, ValidationError> {
    let mut words = [""; 3];
    for (slot, field) in words.iter_mut().zip(GENERATION_FIELDS) {
        let Some(value) = body.get(field) else {
            return Err(ValidationError::for_field(
                ValidationCode::MissingField,
                field,
                format!("Field \"{field}\" is required"),
            ));
        };
        let Some(text) = value.as_str() else {
            return Err(ValidationError::for_field(
                ValidationCode::InvalidType,
                field,
                format!("Field \"{field}\" must be a string"),
            ));
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::for_field(
                ValidationCode::EmptyField,
                field,
                format!("Field \"{field}\" cannot be empty"),
            ));
        }
        if trimmed.chars().count() > MAX_WORD_CHARS {
            return Err(ValidationError::for_field(
                ValidationCode::FieldTooLong,
                field,
                format!("Field \"{field}\" must be {MAX_WORD_CHARS} characters or less"),
            ));
        }
        *slot = trimmed;
    }
    let [verb, adjective, noun] = words;
    Ok(PoemRequest::new(verb, adjective, noun))
}

/// Validate a theme analysis body.
///
/// Requires `poem` as a non-empty string of at most [`MAX_POEM_CHARS`]
/// characters. The returned poem is trimmed.
pub fn validate_analysis(body: &Map<String, Value>) -> Result<ThemeRequest, ValidationError> {
    let Some(value) = body.get("poem") else {
        return Err(ValidationError::for_field(
            ValidationCode::MissingPoem,
            "poem",
            "Poem text is required",
        ));
    };
    let Some(text) = value.as_str() else {
        return Err(ValidationError::for_field(
            ValidationCode::InvalidType,
            "poem",
            "Poem must be a string",
        ));
    };
    let poem = text.trim();
    if poem.is_empty() {
        return Err(ValidationError::for_field(
            ValidationCode::EmptyPoem,
            "poem",
            "Poem cannot be empty",
        ));
    }
    if poem.chars().count() > MAX_POEM_CHARS {
        return Err(ValidationError::for_field(
            ValidationCode::PoemTooLong,
            "poem",
            format!("Poem must be {MAX_POEM_CHARS} characters or less"),
        ));
    }
    Ok(ThemeRequest {
        poem: poem.to_string(),
    })
}
