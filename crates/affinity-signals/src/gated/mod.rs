//! Signals evaluated only for one focal category.
//!
//! This module provides:
//! - Same technology: focal item is `Code`
//! - Same tool: focal item is `Template`
//! - Prerequisite similarity: focal item is `Tutoriel`
//!
//! Outside its gate each signal contributes nothing, even when the compared
//! fields match. The candidate's own category is never consulted.

mod prerequisites;
mod technology;
mod tool;

pub use prerequisites::{PrerequisiteSimilarity, PrerequisiteSimilarityConfig};
pub use technology::{SameTechnology, SameTechnologyConfig};
pub use tool::{SameTool, SameToolConfig};
