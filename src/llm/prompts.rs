use crate::models::presentation::PresentationData;

const DOCUMENT_SHAPE: &str = r##"{
  "title": "Main presentation title",
  "subtitle": "Optional subtitle",
  "author": "MagicSlides AI",
  "slides": [
    {
      "title": "Slide title",
      "content": ["Bullet point 1", "Bullet point 2", "Bullet point 3"],
      "layout": "content",
      "notes": "Optional speaker notes"
    }
  ],
  "theme": {
    "primaryColor": "#1f2937",
    "secondaryColor": "#3b82f6",
    "backgroundColor": "#ffffff",
    "fontFamily": "Arial"
  }
}"##;

/// Instruction for a fresh document built from the user's request.
pub fn build_presentation_prompt(request: &str) -> String {
    format!(
        r#"Create a PowerPoint presentation based on the following request: "{request}"

Respond with a JSON object that follows this exact structure:
{DOCUMENT_SHAPE}

Guidelines:
1. Create 5-8 slides unless the request asks for a different number
2. Use clear, concise bullet points
3. Choose a layout per slide: "title", "content", "twoColumn", or "image"
4. Include speaker notes for important slides
5. Select a professional color scheme
6. Make the content engaging and informative
7. Keep a logical flow between slides

Respond only with the JSON object, no additional text.
"#
    )
}

/// Instruction for revising `current` according to `edit_request`.
///
/// The current document is embedded verbatim so the model can echo the parts
/// the edit does not touch.
pub fn build_edit_prompt(
    current: &PresentationData,
    edit_request: &str,
) -> Result<String, serde_json::Error> {
    let current_json = serde_json::to_string_pretty(current)?;
    Ok(format!(
        r#"Current presentation data:
{current_json}

Edit request: "{edit_request}"

Modify the presentation according to the edit request and respond with the updated JSON object, following the same structure:
{DOCUMENT_SHAPE}

Guidelines:
1. Preserve existing content unless the edit request asks to change it
2. Make targeted changes based on the edit request
3. Keep the style and theme consistent
4. Keep transitions between slides smooth
5. Keep professional formatting

Respond only with the updated JSON object, no additional text.
"#
    ))
}
