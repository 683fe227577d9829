//! Data loading utilities for the affinity CLI.

use std::{fs, path::Path};

use affinity::{ContentItem, Identifier, Timestamp, UserHistoryEntry};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} {}", path.display()))?;
    let records: Vec<T> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {what} {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "loaded {what}");
    Ok(records)
}

/// Load a catalog: a JSON array of content items.
pub(crate) fn load_catalog(path: &Path) -> Result<Vec<ContentItem>> {
    load_json(path, "catalog")
}

/// Load user history: a JSON array of `{category, tags}` entries.
pub(crate) fn load_history(path: &Path) -> Result<Vec<UserHistoryEntry>> {
    load_json(path, "history")
}

/// Interpret a command-line id: integers first, anything else as a string.
pub(crate) fn parse_id(raw: &str) -> Identifier {
    raw.trim()
        .parse::<i64>()
        .map_or_else(|_| Identifier::from(raw), Identifier::Int)
}

/// Find the item with the given id.
pub(crate) fn find_item<'a>(catalog: &'a [ContentItem], raw: &str) -> Result<&'a ContentItem> {
    let id = parse_id(raw);
    match catalog.iter().find(|item| item.id == id) {
        Some(item) => Ok(item),
        None => bail!("item '{raw}' not found in catalog"),
    }
}

/// Parse an RFC 3339 instant, defaulting to the system clock.
pub(crate) fn parse_now(raw: Option<&str>) -> Result<Timestamp> {
    match raw {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("invalid --now '{s}', expected RFC 3339")),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Identifier::Int(42));
        assert_eq!(parse_id("-3"), Identifier::Int(-3));
        assert_eq!(parse_id("abc"), Identifier::from("abc"));
        assert_eq!(parse_id("4a"), Identifier::from("4a"));
    }

    #[test]
    fn test_find_item() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let catalog = vec![
            ContentItem::new(7, created),
            ContentItem::new("seven", created),
        ];
        assert_eq!(find_item(&catalog, "7").unwrap().id, Identifier::Int(7));
        assert_eq!(
            find_item(&catalog, "seven").unwrap().id,
            Identifier::from("seven")
        );
        assert!(find_item(&catalog, "8").is_err());
    }

    #[test]
    fn test_parse_now() {
        let now = parse_now(Some("2024-06-01T12:00:00+02:00")).unwrap();
        assert_eq!(now, Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap());
        assert!(parse_now(Some("2024-06-01")).is_err());
        assert!(parse_now(None).is_ok());
    }

    #[test]
    fn test_load_catalog() {
        let path = std::env::temp_dir().join(format!("affinity-catalog-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"id": 1, "category": "Code", "tags": ["rust"], "views": "12", "createdAt": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        let catalog = load_catalog(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].tags, vec!["rust".to_string()]);
    }

    #[test]
    fn test_load_catalog_rejects_bad_json() {
        let path = std::env::temp_dir().join(format!("affinity-bad-{}.json", std::process::id()));
        fs::write(&path, "{not json").unwrap();
        let err = load_catalog(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("failed to parse catalog"));
    }
}
