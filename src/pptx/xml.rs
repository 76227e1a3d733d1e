pub const EMU_PER_INCH: f64 = 914_400.0;
pub const EMU_PER_POINT: i64 = 12_700;

/// Widescreen 13.333 × 7.5 in.
pub const SLIDE_CX: i64 = 12_192_000;
pub const SLIDE_CY: i64 = 6_858_000;

pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Escape text for element content and attribute values. Characters that
/// XML 1.0 cannot carry at all are dropped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

/// Normalise a CSS-style colour (`#1f2937`, `1F2937`, `#fff`) to the six
/// upper-case hex digits DrawingML expects. Anything else yields `fallback`.
pub fn hex_color(value: &str, fallback: &str) -> String {
    parse_hex(value)
        .or_else(|| parse_hex(fallback))
        .unwrap_or_else(|| "000000".to_string())
}

fn parse_hex(value: &str) -> Option<String> {
    let digits = value.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(digits.to_ascii_uppercase()),
        3 => Some(
            digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_uppercase(),
        ),
        _ => None,
    }
}

pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

pub const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// `<Relationships>` part from `(id, type suffix, target)` triples.
pub fn relationships(rels: &[(String, &str, String)]) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, kind, target) in rels {
        let kind = if kind.starts_with("http") {
            kind.to_string()
        } else {
            format!("{REL_BASE}/{kind}")
        };
        out.push_str(&format!(
            r#"<Relationship Id="{id}" Type="{kind}" Target="{}"/>"#,
            escape(target)
        ));
    }
    out.push_str("</Relationships>");
    out
}
