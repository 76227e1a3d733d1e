//! Presentation document → `.pptx` package.
//!
//! `layout` decides *what* goes on each slide (positioned text boxes, one of
//! four fixed templates). `writer` serialises those boxes into the Office
//! Open XML parts and zips them. `xml` holds the escaping and unit helpers
//! both share.

pub mod layout;
pub mod writer;
pub mod xml;

use std::fmt;

pub use layout::{plan_deck, plan_slide, split_columns, DeckPlan, SlidePlan, TextBox};
pub use writer::{write_pptx, write_pptx_to};

pub const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Zip(zip::result::ZipError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "I/O error while writing presentation: {e}"),
            RenderError::Zip(e) => write!(f, "Zip error while writing presentation: {e}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<zip::result::ZipError> for RenderError {
    fn from(e: zip::result::ZipError) -> Self {
        RenderError::Zip(e)
    }
}
