//! Common types used throughout the affinity engine.
//!
//! This module defines the content record scored by the engine, the user
//! history record it reads, and the scored pair it returns.
//!
//! Deserialization is deliberately forgiving: records arrive from an external
//! catalog, so malformed counters and unknown categories are coerced instead
//! of rejected.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

use crate::AffinityError;

/// Instant type used for `created_at` and the caller-supplied `now`.
pub type Timestamp = DateTime<Utc>;

/// Identifier of a content item or an author.
///
/// Catalogs use either integer or string keys. Ordering places every
/// integer id before every string id; integers compare numerically and
/// strings compare by bytes.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric identifier.
    #[display("{_0}")]
    Int(i64),
    /// Textual identifier.
    #[display("{_0}")]
    Str(String),
}

impl Identifier {
    /// Whether this is a string id with no visible characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Str(s) => s.trim().is_empty(),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// Content category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
pub enum Category {
    /// Data sets.
    Dataset,
    /// Tutorials.
    Tutoriel,
    /// Tools.
    Outil,
    /// Reusable templates.
    Template,
    /// Reference documentation.
    Documentation,
    /// Source code.
    Code,
    /// Books.
    Livre,
    /// Anything else.
    Autre,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Dataset,
        Self::Tutoriel,
        Self::Outil,
        Self::Template,
        Self::Documentation,
        Self::Code,
        Self::Livre,
        Self::Autre,
    ];

    /// Canonical name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dataset => "Dataset",
            Self::Tutoriel => "Tutoriel",
            Self::Outil => "Outil",
            Self::Template => "Template",
            Self::Documentation => "Documentation",
            Self::Code => "Code",
            Self::Livre => "Livre",
            Self::Autre => "Autre",
        }
    }
}

impl FromStr for Category {
    type Err = AffinityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AffinityError::Other(format!("Unknown category: '{s}'")))
    }
}

/// A content record, either the focal item or a candidate.
///
/// Every optional text field contributes nothing to scoring when absent or
/// empty.
///
/// # Example
///
/// ```
/// use affinity_traits::{Category, ContentItem};
/// use chrono::{TimeZone, Utc};
///
/// let item = ContentItem::new(7, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
///     .with_category(Category::Dataset)
///     .with_tags(["Python", "SQL"])
///     .with_title("Open data about Paris bike lanes");
///
/// assert_eq!(item.tags.len(), 2);
/// assert_eq!(item.category, Some(Category::Dataset));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique, stable identifier.
    pub id: Identifier,

    /// Category; unknown names deserialize to `None`.
    #[serde(
        default,
        deserialize_with = "lenient_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,

    /// Tags in their original casing.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,

    /// Difficulty level label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    /// Natural or programming language label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Technology stack, meaningful for code items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,

    /// Tool the template targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    /// Free-text prerequisites, meaningful for tutorials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,

    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Creator of the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Identifier>,

    /// View counter.
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: u64,

    /// Like counter.
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: u64,

    /// Creation instant.
    pub created_at: Timestamp,
}

impl ContentItem {
    /// Creates an item with the given id and creation time and no other data.
    pub fn new(id: impl Into<Identifier>, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            category: None,
            tags: Vec::new(),
            difficulty: None,
            language: None,
            technology: None,
            tool: None,
            prerequisites: None,
            title: None,
            author_id: None,
            views: 0,
            likes: 0,
            created_at,
        }
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Sets the language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the technology.
    #[must_use]
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    /// Sets the tool.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Sets the prerequisites.
    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: impl Into<String>) -> Self {
        self.prerequisites = Some(prerequisites.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author_id: impl Into<Identifier>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Sets the view and like counters.
    #[must_use]
    pub const fn with_engagement(mut self, views: u64, likes: u64) -> Self {
        self.views = views;
        self.likes = likes;
        self
    }
}

/// A prior interaction of the requesting user.
///
/// Only the category and the tags are read; ordering across entries is
/// irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHistoryEntry {
    /// Category of the item the user interacted with.
    #[serde(
        default,
        deserialize_with = "lenient_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,

    /// Tags of the item the user interacted with.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
}

impl UserHistoryEntry {
    /// Creates a history entry.
    pub fn new<I, S>(category: Option<Category>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A candidate paired with its composite relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate<'a> {
    /// The scored catalog item.
    pub item: &'a ContentItem,
    /// Composite score.
    pub score: f64,
}

impl<'a> ScoredCandidate<'a> {
    /// Pairs an item with its score.
    pub const fn new(item: &'a ContentItem, score: f64) -> Self {
        Self { item, score }
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any JSON-ish scalar and coerces it to a non-negative count.
///
/// Negative, fractional-negative, non-finite, non-numeric and missing values
/// become 0; positive fractions truncate.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative count")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            Ok(u64::try_from(v).unwrap_or(0))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            Ok(coerce_float(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            let v = v.trim();
            Ok(v.parse::<u64>()
                .unwrap_or_else(|_| v.parse::<f64>().map(coerce_float).unwrap_or(0)))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<u64, D2::Error> {
            d.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<u64, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(0)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<u64, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(0)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

fn coerce_float(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 { v as u64 } else { 0 }
}
