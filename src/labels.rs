use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("[E010] Labels must be strings, got: {0}\n\nSuggestions:\n  • Use a JSON array of strings, e.g. [\"cat\", \"dog\"]\n  • Or a comma-separated list, e.g. cat,dog")]
    NotStrings(String),
}

/// Parses candidate labels the way the server does: a JSON array of
/// strings, otherwise a comma-separated list with blank entries dropped.
///
/// Emptiness and count limits are the server's call and aren't checked.
///
/// # Errors
///
/// Fails if `raw` is a JSON array holding anything but strings.
pub fn parse_labels(raw: &str) -> Result<Vec<String>, LabelError> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
            return values
                .into_iter()
                .map(|value| match value {
                    serde_json::Value::String(label) => Ok(label),
                    other => Err(LabelError::NotStrings(other.to_string())),
                })
                .collect();
        }
    }

    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_json_array() {
        assert_eq!(
            parse_labels(r#"["a photo of a cat", "a dog, barking"]"#).unwrap(),
            vec!["a photo of a cat", "a dog, barking"]
        );
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(
            parse_labels(" cat, dog ,, car ").unwrap(),
            vec!["cat", "dog", "car"]
        );
    }

    #[test]
    fn test_malformed_json_falls_back_to_commas() {
        assert_eq!(parse_labels("[cat, dog").unwrap(), vec!["[cat", "dog"]);
    }

    #[test]
    fn test_non_string_json_entries() {
        assert_eq!(
            parse_labels("[\"cat\", 3]"),
            Err(LabelError::NotStrings("3".to_string()))
        );
    }

    #[test]
    fn test_empty_input_yields_no_labels() {
        assert!(parse_labels("").unwrap().is_empty());
        assert!(parse_labels("[]").unwrap().is_empty());
    }
}
