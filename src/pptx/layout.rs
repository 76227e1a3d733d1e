use crate::models::presentation::{Layout, PresentationData, Slide, Theme};

/// Position and size in inches from the top-left corner of the slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

const fn frame(x: f64, y: f64, w: f64, h: f64) -> Frame {
    Frame { x, y, w, h }
}

const HEADING: Frame = frame(0.5, 0.5, 12.0, 0.8);
const TITLE: Frame = frame(1.0, 2.5, 11.0, 1.5);
const SUBTITLE: Frame = frame(1.0, 4.2, 11.0, 1.0);
const BODY: Frame = frame(0.5, 1.5, 11.5, 5.0);
const LEFT_COLUMN: Frame = frame(0.5, 1.5, 5.5, 5.0);
const RIGHT_COLUMN: Frame = frame(6.5, 1.5, 5.5, 5.0);
const IMAGE_BODY: Frame = frame(0.5, 1.5, 5.5, 4.0);
const IMAGE_PLACEHOLDER: Frame = frame(6.5, 2.0, 5.0, 3.5);
const RULE: Frame = frame(0.5, 6.9, 12.5, 0.0);

const PLACEHOLDER_FILL: &str = "#f3f4f6";
pub const PLACEHOLDER_LINES: [&str; 3] = ["[Image Placeholder]", "", "Add your image here"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub width_pt: u32,
    pub color: String,
}

/// One text shape. Each entry in `lines` becomes its own paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub frame: Frame,
    pub lines: Vec<String>,
    pub font_size: u32,
    pub font_face: String,
    pub color: String,
    pub bold: bool,
    pub align: HAlign,
    pub valign: VAlign,
    /// Line spacing in points.
    pub line_spacing: Option<u32>,
    pub fill: Option<String>,
    pub border: Option<Border>,
}

impl TextBox {
    fn new(frame: Frame, lines: Vec<String>, font_size: u32, theme: &Theme) -> Self {
        TextBox {
            frame,
            lines,
            font_size,
            font_face: theme.font_family.clone(),
            color: theme.primary_color.clone(),
            bold: false,
            align: HAlign::Left,
            valign: VAlign::Top,
            line_spacing: None,
            fill: None,
            border: None,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// The horizontal rule every slide inherits from the master.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub frame: Frame,
    pub color: String,
    pub width_pt: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlidePlan {
    pub layout: Layout,
    pub boxes: Vec<TextBox>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckPlan {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub theme: Theme,
    pub rule: Rule,
    pub slides: Vec<SlidePlan>,
}

pub fn plan_deck(doc: &PresentationData) -> DeckPlan {
    DeckPlan {
        title: doc.title.clone(),
        author: doc.author.clone(),
        subject: doc.subtitle.clone(),
        theme: doc.theme.clone(),
        rule: Rule {
            frame: RULE,
            color: doc.theme.secondary_color.clone(),
            width_pt: 3,
        },
        slides: doc
            .slides
            .iter()
            .map(|slide| plan_slide(slide, &doc.theme))
            .collect(),
    }
}

pub fn plan_slide(slide: &Slide, theme: &Theme) -> SlidePlan {
    let boxes = match slide.layout {
        Layout::Title => title_slide(slide, theme),
        Layout::Content => content_slide(slide, theme),
        Layout::TwoColumn => two_column_slide(slide, theme),
        Layout::Image => image_slide(slide, theme),
    };
    SlidePlan {
        layout: slide.layout,
        boxes,
        notes: (!slide.notes.is_empty()).then(|| slide.notes.clone()),
    }
}

/// Split at `ceil(n / 2)`: an odd item count leaves the extra one on the left.
pub fn split_columns(items: &[String]) -> (&[String], &[String]) {
    items.split_at(items.len().div_ceil(2))
}

fn bullets(items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("• {item}")).collect()
}

fn heading(slide: &Slide, theme: &Theme) -> TextBox {
    TextBox {
        bold: true,
        ..TextBox::new(HEADING, vec![slide.title.clone()], 32, theme)
    }
}

fn bullet_box(frame: Frame, items: &[String], font_size: u32, spacing: u32, theme: &Theme) -> TextBox {
    TextBox {
        line_spacing: Some(spacing),
        ..TextBox::new(frame, bullets(items), font_size, theme)
    }
}

fn title_slide(slide: &Slide, theme: &Theme) -> Vec<TextBox> {
    let mut boxes = vec![TextBox {
        bold: true,
        align: HAlign::Center,
        ..TextBox::new(TITLE, vec![slide.title.clone()], 44, theme)
    }];
    if let Some(first) = slide.content.first() {
        boxes.push(TextBox {
            align: HAlign::Center,
            color: theme.secondary_color.clone(),
            ..TextBox::new(SUBTITLE, vec![first.clone()], 28, theme)
        });
    }
    boxes
}

fn content_slide(slide: &Slide, theme: &Theme) -> Vec<TextBox> {
    let mut boxes = vec![heading(slide, theme)];
    if !slide.content.is_empty() {
        boxes.push(bullet_box(BODY, &slide.content, 18, 28, theme));
    }
    boxes
}

fn two_column_slide(slide: &Slide, theme: &Theme) -> Vec<TextBox> {
    let mut boxes = vec![heading(slide, theme)];
    let (left, right) = split_columns(&slide.content);
    if !left.is_empty() {
        boxes.push(bullet_box(LEFT_COLUMN, left, 18, 28, theme));
    }
    if !right.is_empty() {
        boxes.push(bullet_box(RIGHT_COLUMN, right, 18, 28, theme));
    }
    boxes
}

fn image_slide(slide: &Slide, theme: &Theme) -> Vec<TextBox> {
    let mut boxes = vec![heading(slide, theme)];
    if !slide.content.is_empty() {
        boxes.push(bullet_box(IMAGE_BODY, &slide.content, 16, 24, theme));
    }
    boxes.push(TextBox {
        color: theme.secondary_color.clone(),
        align: HAlign::Center,
        valign: VAlign::Middle,
        fill: Some(PLACEHOLDER_FILL.to_string()),
        border: Some(Border {
            width_pt: 1,
            color: theme.secondary_color.clone(),
        }),
        ..TextBox::new(
            IMAGE_PLACEHOLDER,
            PLACEHOLDER_LINES.iter().map(|l| l.to_string()).collect(),
            14,
            theme,
        )
    });
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(layout: Layout, content: &[&str]) -> Slide {
        Slide {
            title: "Heading".into(),
            content: content.iter().map(|s| s.to_string()).collect(),
            layout,
            notes: String::new(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_odd_puts_extra_item_left() {
        let items = strings(&["a", "b", "c", "d", "e"]);
        let (left, right) = split_columns(&items);
        assert_eq!(left, &items[..3]);
        assert_eq!(right, &items[3..]);
    }

    #[test]
    fn split_even_and_degenerate() {
        let items = strings(&["a", "b", "c", "d"]);
        let (left, right) = split_columns(&items);
        assert_eq!((left.len(), right.len()), (2, 2));

        let one = strings(&["only"]);
        let (left, right) = split_columns(&one);
        assert_eq!((left.len(), right.len()), (1, 0));

        let (left, right) = split_columns(&[]);
        assert!(left.is_empty() && right.is_empty());
    }

    #[test]
    fn two_column_slide_places_columns() {
        let plan = plan_slide(&slide(Layout::TwoColumn, &["a", "b", "c"]), &Theme::default());
        assert_eq!(plan.boxes.len(), 3);
        assert_eq!(plan.boxes[1].frame, LEFT_COLUMN);
        assert_eq!(plan.boxes[1].lines, strings(&["• a", "• b"]));
        assert_eq!(plan.boxes[2].frame, RIGHT_COLUMN);
        assert_eq!(plan.boxes[2].lines, strings(&["• c"]));
    }

    #[test]
    fn two_column_with_single_item_omits_right_column() {
        let plan = plan_slide(&slide(Layout::TwoColumn, &["a"]), &Theme::default());
        assert_eq!(plan.boxes.len(), 2);
        assert_eq!(plan.boxes[1].frame, LEFT_COLUMN);
    }

    #[test]
    fn title_slide_uses_first_item_as_subtitle() {
        let theme = Theme::default();
        let plan = plan_slide(&slide(Layout::Title, &["Subtitle", "ignored"]), &theme);
        assert_eq!(plan.boxes.len(), 2);
        assert_eq!(plan.boxes[0].font_size, 44);
        assert!(plan.boxes[0].bold);
        assert_eq!(plan.boxes[0].align, HAlign::Center);
        assert_eq!(plan.boxes[1].text(), "Subtitle");
        assert_eq!(plan.boxes[1].color, theme.secondary_color);
    }

    #[test]
    fn title_slide_without_content_has_only_title() {
        let plan = plan_slide(&slide(Layout::Title, &[]), &Theme::default());
        assert_eq!(plan.boxes.len(), 1);
    }

    #[test]
    fn content_slide_bullets_every_item() {
        let plan = plan_slide(&slide(Layout::Content, &["one", "two"]), &Theme::default());
        assert_eq!(plan.boxes[0].frame, HEADING);
        assert_eq!(plan.boxes[0].font_size, 32);
        assert_eq!(plan.boxes[1].text(), "• one\n• two");
        assert_eq!(plan.boxes[1].line_spacing, Some(28));
    }

    #[test]
    fn image_slide_always_has_placeholder() {
        let plan = plan_slide(&slide(Layout::Image, &[]), &Theme::default());
        assert_eq!(plan.boxes.len(), 2);
        let placeholder = &plan.boxes[1];
        assert_eq!(placeholder.frame, IMAGE_PLACEHOLDER);
        assert_eq!(placeholder.text(), "[Image Placeholder]\n\nAdd your image here");
        assert_eq!(placeholder.valign, VAlign::Middle);
        assert_eq!(placeholder.fill.as_deref(), Some("#f3f4f6"));
        assert_eq!(placeholder.border.as_ref().map(|b| b.width_pt), Some(1));
    }

    #[test]
    fn notes_only_when_present() {
        let mut s = slide(Layout::Content, &["x"]);
        assert_eq!(plan_slide(&s, &Theme::default()).notes, None);
        s.notes = "Remember to smile".into();
        assert_eq!(
            plan_slide(&s, &Theme::default()).notes.as_deref(),
            Some("Remember to smile")
        );
    }

    #[test]
    fn deck_rule_uses_secondary_color() {
        let doc = PresentationData {
            title: "Deck".into(),
            subtitle: "Sub".into(),
            author: "Ada".into(),
            slides: vec![slide(Layout::Content, &["x"])],
            theme: Theme::default(),
        };
        let plan = plan_deck(&doc);
        assert_eq!(plan.rule.color, "#3b82f6");
        assert_eq!(plan.rule.width_pt, 3);
        assert_eq!(plan.subject, "Sub");
        assert_eq!(plan.slides.len(), 1);
    }
}
