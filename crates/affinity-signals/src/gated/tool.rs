//! Same-tool signal for templates.

use affinity_traits::{Category, ContentItem, ScoringContext, Signal, text::eq_ignore_case};
use serde::{Deserialize, Serialize};

/// Configuration for the same-tool signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SameToolConfig {
    /// Contribution on a match (default: 10.0)
    pub weight: f64,
}

impl Default for SameToolConfig {
    fn default() -> Self {
        Self { weight: 10.0 }
    }
}

/// Rewards candidates targeting the focal template's tool.
///
/// Only active when the focal item is in [`Category::Template`].
#[derive(Debug, Clone, Default)]
pub struct SameTool {
    config: SameToolConfig,
}

impl SameTool {
    /// Focal category this signal is evaluated for.
    pub const GATE: Category = Category::Template;

    /// Create a new same-tool signal with the given configuration.
    #[must_use]
    pub const fn new(config: SameToolConfig) -> Self {
        Self { config }
    }
}

impl Signal for SameTool {
    fn name(&self) -> &str {
        "same_tool"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        if ctx.focal_category() == Some(Self::GATE)
            && eq_ignore_case(candidate.tool.as_deref(), ctx.focal().tool.as_deref())
        {
            self.config.weight
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, item};

    #[test]
    fn test_active_for_template_focal() {
        let focal = item(1).with_category(Category::Template).with_tool("Notion");
        let candidate = item(2).with_category(Category::Outil).with_tool("NOTION");
        assert_eq!(contribution(&SameTool::default(), &candidate, &focal), 10.0);
    }

    #[test]
    fn test_gated_for_code_focal() {
        let focal = item(1).with_category(Category::Code).with_tool("Notion");
        let candidate = item(2).with_tool("Notion");
        assert_eq!(contribution(&SameTool::default(), &candidate, &focal), 0.0);
    }

    #[test]
    fn test_custom_weight() {
        let signal = SameTool::new(SameToolConfig { weight: 1.0 });
        let focal = item(1).with_category(Category::Template).with_tool("Figma");
        let candidate = item(2).with_tool("figma");
        assert_eq!(contribution(&signal, &candidate, &focal), 1.0);
    }
}
