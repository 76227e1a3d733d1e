/// Validate a required string field with length bounds (in characters).
/// Messages follow the `"field" ...` wording the web client displays.
pub fn validate_length(value: Option<&str>, field_name: &str, min: usize, max: usize) -> Option<String> {
    let Some(value) = value else {
        return Some(format!("\"{field_name}\" is required"));
    };
    if value.is_empty() {
        return Some(format!("\"{field_name}\" is not allowed to be empty"));
    }
    let len = value.chars().count();
    if len < min {
        return Some(format!("\"{field_name}\" length must be at least {min} characters long"));
    }
    if len > max {
        return Some(format!(
            "\"{field_name}\" length must be less than or equal to {max} characters long"
        ));
    }
    None
}

/// Validate a required, non-empty string field.
pub fn validate_required(value: Option<&str>, field_name: &str) -> Option<String> {
    match value {
        None => Some(format!("\"{field_name}\" is required")),
        Some("") => Some(format!("\"{field_name}\" is not allowed to be empty")),
        Some(_) => None,
    }
}

/// Validate that a required field is a JSON object.
pub fn validate_object(value: Option<&serde_json::Value>, field_name: &str) -> Option<String> {
    match value {
        None | Some(serde_json::Value::Null) => Some(format!("\"{field_name}\" is required")),
        Some(serde_json::Value::Object(_)) => None,
        Some(_) => Some(format!("\"{field_name}\" must be of type object")),
    }
}
