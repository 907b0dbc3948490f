use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_NAME_WORDS: usize = 4;

/// Forms that the similarity match cannot bridge, rewritten to the key
/// the registry actually uses. Applied before any other lookup.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("lily", "lilies"),
    ("lilly", "lilies"),
    ("peony", "peonies"),
];

/// Trims, lowercases and collapses inner whitespace, then validates the
/// result and rewrites known irregular forms.
///
/// Rejects empty names, names without any letter, names longer than
/// [`MAX_NAME_CHARS`] and names with more than [`MAX_NAME_WORDS`] words.
pub fn normalize(raw: &str) -> Result<String, CoreError> {
    let words: Vec<String> = raw.split_whitespace().map(str::to_lowercase).collect();

    if words.is_empty() {
        return Err(CoreError::InvalidInput("flower name is empty".to_string()));
    }

    if words.len() > MAX_NAME_WORDS {
        return Err(CoreError::InvalidInput(format!(
            "flower name must be at most {MAX_NAME_WORDS} words"
        )));
    }

    let name = words.join(" ");

    if name.chars().count() > MAX_NAME_CHARS {
        return Err(CoreError::InvalidInput(format!(
            "flower name must be at most {MAX_NAME_CHARS} characters"
        )));
    }

    if !name.chars().any(char::is_alphabetic) {
        return Err(CoreError::InvalidInput(
            "flower name must contain letters".to_string(),
        ));
    }

    Ok(rewrite_irregular(name))
}

fn rewrite_irregular(name: String) -> String {
    IRREGULAR_FORMS
        .iter()
        .find(|(form, _)| *form == name)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Roses \n").unwrap(), "roses");
        assert_eq!(normalize("Pussy   Willow").unwrap(), "pussy willow");
    }

    #[test]
    fn test_normalize_rewrites_irregular_forms() {
        assert_eq!(normalize("Lily").unwrap(), "lilies");
        assert_eq!(normalize("PEONY").unwrap(), "peonies");
        // Forms outside the table are left for the matcher.
        assert_eq!(normalize("lillies").unwrap(), "lillies");
    }

    #[test]
    fn test_normalize_rejects_empty_and_whitespace() {
        assert!(matches!(normalize(""), Err(CoreError::InvalidInput(_))));
        assert!(matches!(normalize("   \t "), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_normalize_rejects_more_than_four_words() {
        assert!(normalize("one two three four").is_ok());
        assert!(matches!(
            normalize("is this flower safe really"),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normalize_requires_letters() {
        assert!(matches!(normalize("1234 !!"), Err(CoreError::InvalidInput(_))));
        assert_eq!(normalize("rose 2").unwrap(), "rose 2");
    }

    #[test]
    fn test_normalize_rejects_overlong_names() {
        let long = "a".repeat(MAX_NAME_CHARS + 1);
        assert!(matches!(normalize(&long), Err(CoreError::InvalidInput(_))));
    }
}
