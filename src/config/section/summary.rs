//! `[summary]` configuration.
//!
//! ```toml
//! [summary]
//! post = 200      # Post pages and the blog index
//! recent = 150    # Recent posts on the main page
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::markdown::SummaryStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySectionConfig {
    /// Character budget for post page and blog index summaries.
    pub post: usize,

    /// Character budget for main page summaries.
    pub recent: usize,
}

impl Default for SummarySectionConfig {
    fn default() -> Self {
        Self {
            post: SummaryStyle::POST.budget,
            recent: SummaryStyle::RECENT.budget,
        }
    }
}

impl SummarySectionConfig {
    pub const POST: FieldPath = FieldPath::new("summary.post");
    pub const RECENT: FieldPath = FieldPath::new("summary.recent");

    pub const fn post_style(&self) -> SummaryStyle {
        SummaryStyle::POST.with_budget(self.post)
    }

    pub const fn recent_style(&self) -> SummaryStyle {
        SummaryStyle::RECENT.with_budget(self.recent)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.post == 0 {
            diag.error(Self::POST, "summary budget must be greater than 0");
        }
        if self.recent == 0 {
            diag.error(Self::RECENT, "summary budget must be greater than 0");
        }
    }
}
