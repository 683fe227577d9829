//! Engagement signals: what the user has seen, what is popular, what is new.
//!
//! This module provides:
//! - History category and history tags: overlap with the requesting user's
//!   past interactions
//! - Popularity: log-damped views and likes
//! - Recency: bonus for items created inside a recent window
//!
//! Popularity is independent of the focal item, so any item with views or
//! likes scores above zero.

mod history;
mod popularity;
mod recency;

pub use history::{HistoryCategory, HistoryCategoryConfig, HistoryTags, HistoryTagsConfig};
pub use popularity::{Popularity, PopularityConfig};
pub use recency::{Recency, RecencyConfig};
