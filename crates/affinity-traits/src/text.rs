//! Case-insensitive text helpers shared by the signals.
//!
//! All string comparisons in the engine go through these functions, so
//! "equal" always means "equal after lower-casing" and "present" always
//! means "`Some` and non-empty".

use std::collections::HashSet;

/// Minimum length (exclusive, in characters) of a title word that counts
/// toward title overlap.
pub const MIN_TITLE_WORD_LEN: usize = 3;

/// Returns the value if it is present and non-empty.
///
/// # Examples
///
/// ```
/// use affinity_traits::text::present;
///
/// assert_eq!(present(Some("Rust")), Some("Rust"));
/// assert_eq!(present(Some("")), None);
/// assert_eq!(present(None), None);
/// ```
#[must_use]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Whether both values are present and equal ignoring case.
#[must_use]
pub fn eq_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (present(a), present(b)) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

/// Whether both values are present and one, lower-cased, contains the other.
///
/// # Examples
///
/// ```
/// use affinity_traits::text::contains_either;
///
/// assert!(contains_either(Some("Bases de Python"), Some("python")));
/// assert!(contains_either(Some("sql"), Some("SQL avancé")));
/// assert!(!contains_either(Some("Excel"), Some("Python")));
/// assert!(!contains_either(Some(""), Some("Python")));
/// ```
#[must_use]
pub fn contains_either(a: Option<&str>, b: Option<&str>) -> bool {
    match (present(a), present(b)) {
        (Some(a), Some(b)) => {
            let (a, b) = (a.to_lowercase(), b.to_lowercase());
            a.contains(&b) || b.contains(&a)
        }
        _ => false,
    }
}

/// Lower-cases and deduplicates a collection of tags, dropping empty ones.
///
/// `{"Python", "python"}` collapses to a single entry.
#[must_use]
pub fn normalized_tags<I, S>(tags: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Splits a title on whitespace into its distinct lower-cased words longer
/// than [`MIN_TITLE_WORD_LEN`] characters.
///
/// # Examples
///
/// ```
/// use affinity_traits::text::title_words;
///
/// let words = title_words("Intro to Data Cleaning with pandas");
/// assert!(words.contains("intro"));
/// assert!(words.contains("cleaning"));
/// assert!(!words.contains("to"));
/// assert!(words.contains("data"));
/// ```
#[must_use]
pub fn title_words(title: &str) -> HashSet<String> {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() > MIN_TITLE_WORD_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert_eq!(present(Some("x")), Some("x"));
        assert_eq!(present(Some("")), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case(Some("Débutant"), Some("DÉBUTANT")));
        assert!(eq_ignore_case(Some("fr"), Some("FR")));
        assert!(!eq_ignore_case(Some("fr"), Some("en")));
        assert!(!eq_ignore_case(Some(""), Some("")));
        assert!(!eq_ignore_case(None, Some("fr")));
        assert!(!eq_ignore_case(None, None));
    }

    #[test]
    fn test_contains_either() {
        assert!(contains_either(Some("Python"), Some("python")));
        assert!(contains_either(Some("notions de python"), Some("PYTHON")));
        assert!(!contains_either(None, Some("python")));
    }

    #[test]
    fn test_normalized_tags_dedup() {
        let tags = normalized_tags(["Python", "python", "SQL", ""]);
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("python"));
        assert!(tags.contains("sql"));
    }

    #[test]
    fn test_normalized_tags_empty() {
        let tags = normalized_tags(Vec::<String>::new());
        assert!(tags.is_empty());
    }

    #[test]
    fn test_title_words_length_threshold() {
        let words = title_words("The best SQL book ever written");
        // "the", "sql" (3) and "best", "book", "ever" (4) vs threshold > 3
        assert!(!words.contains("the"));
        assert!(!words.contains("sql"));
        assert!(words.contains("best"));
        assert!(words.contains("book"));
        assert!(words.contains("written"));
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn test_title_words_whitespace_and_case() {
        let words = title_words("  Machine\tLEARNING\n machine  ");
        assert_eq!(words.len(), 2);
        assert!(words.contains("machine"));
        assert!(words.contains("learning"));
    }

    #[test]
    fn test_title_words_counts_characters() {
        // Four characters, more than four bytes.
        let words = title_words("été café");
        assert!(words.contains("café"));
        assert!(!words.contains("été"));
    }
}
