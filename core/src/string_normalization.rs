use unidecode::unidecode;

/// Normalized form used for forgiving name lookups:
/// ASCII transliteration, lowercase, single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
