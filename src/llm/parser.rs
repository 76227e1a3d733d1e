use serde_json::Value;
use std::fmt;

use crate::models::presentation::{
    Layout, PresentationData, Slide, Theme, DEFAULT_AUTHOR, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_SLIDE_TITLE,
};

/// Why model output could not become a document. Callers only ever see the
/// generic message; the variant goes to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NoJson,
    InvalidJson(String),
    MissingTitle,
    MissingSlides,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ParseError::NoJson => "no JSON object found".to_string(),
            ParseError::InvalidJson(e) => format!("invalid JSON: {e}"),
            ParseError::MissingTitle => "missing title".to_string(),
            ParseError::MissingSlides => "missing or empty slide list".to_string(),
        };
        write!(f, "Failed to parse AI response ({reason})")
    }
}

impl std::error::Error for ParseError {}

/// Greedy brace match: from the first `{` to the last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Turn raw model text into a validated document.
pub fn parse_presentation_response(text: &str) -> Result<PresentationData, ParseError> {
    let json = extract_json(text).ok_or(ParseError::NoJson)?;
    let value: Value =
        serde_json::from_str(json).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    document_from_value(&value)
}

/// Validate an already-parsed JSON value and apply every field default.
pub fn document_from_value(value: &Value) -> Result<PresentationData, ParseError> {
    let title = text_field(value, "title").ok_or(ParseError::MissingTitle)?;
    let slides = match value.get("slides") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(ParseError::MissingSlides),
    };

    let theme = value.get("theme").unwrap_or(&Value::Null);

    Ok(PresentationData {
        title,
        subtitle: text_field(value, "subtitle").unwrap_or_default(),
        author: text_field(value, "author").unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        slides: slides.iter().map(slide_from_value).collect(),
        theme: Theme {
            primary_color: text_field(theme, "primaryColor")
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: text_field(theme, "secondaryColor")
                .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
            background_color: text_field(theme, "backgroundColor")
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
            font_family: text_field(theme, "fontFamily")
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        },
    })
}

fn slide_from_value(value: &Value) -> Slide {
    let content = match value.get("content") {
        Some(Value::Array(items)) => items.iter().map(|v| as_text(v).unwrap_or_default()).collect(),
        // A lone string (or nothing at all) still yields a one-item list.
        other => vec![other.and_then(as_text).unwrap_or_default()],
    };

    Slide {
        title: text_field(value, "title").unwrap_or_else(|| DEFAULT_SLIDE_TITLE.to_string()),
        content,
        layout: text_field(value, "layout")
            .map(|tag| Layout::from_tag(&tag))
            .unwrap_or_default(),
        notes: text_field(value, "notes").unwrap_or_default(),
    }
}

/// A non-empty textual field. Empty strings, nulls and containers count as absent.
fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(as_text)
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
