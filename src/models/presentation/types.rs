use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR: &str = "MagicSlides AI";
pub const DEFAULT_SLIDE_TITLE: &str = "Untitled Slide";

pub const DEFAULT_PRIMARY_COLOR: &str = "#1f2937";
pub const DEFAULT_SECONDARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// A complete slide document, as produced from model output.
///
/// Every optional attribute has already been defaulted by the time a value of
/// this type exists, so renderers never need to re-apply fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub slides: Vec<Slide>,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,
    pub content: Vec<String>,
    pub layout: Layout,
    pub notes: String,
}

/// One of the four fixed slide templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    Title,
    #[default]
    Content,
    TwoColumn,
    Image,
}

impl Layout {
    /// Map a layout tag from model output. Unknown tags fall back to `Content`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => Layout::Title,
            "twoColumn" => Layout::TwoColumn,
            "image" => Layout::Image,
            _ => Layout::Content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// Payload returned after a document has been rendered to disk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub presentation_data: PresentationData,
    pub filename: String,
    pub download_url: String,
}

impl GenerationResult {
    pub fn new(presentation_data: PresentationData, filename: String) -> Self {
        let download_url = format!("/uploads/{filename}");
        GenerationResult {
            presentation_data,
            filename,
            download_url,
        }
    }
}
