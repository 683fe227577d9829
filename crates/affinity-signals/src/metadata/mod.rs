//! Metadata signals comparing the candidate's descriptive fields to the
//! focal item's.
//!
//! This module provides:
//! - Same category: exact category match
//! - Tag overlap: per shared tag, plus a bonus when every focal tag is matched
//! - Same difficulty, same language, same author
//! - Title overlap: per shared significant title word
//!
//! Text comparisons are case-insensitive throughout.

mod attributes;
mod category;
mod tags;
mod title;

pub use attributes::{
    SameAuthor, SameAuthorConfig, SameDifficulty, SameDifficultyConfig, SameLanguage,
    SameLanguageConfig,
};
pub use category::{SameCategory, SameCategoryConfig};
pub use tags::{FullTagCoverage, FullTagCoverageConfig, TagOverlap, TagOverlapConfig};
pub use title::{TitleOverlap, TitleOverlapConfig};
