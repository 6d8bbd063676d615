//! Configuration section definitions.
//!
//! | Section     | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | `[site]`    | Site title and base URL                   |
//! | `[build]`   | Source, template, static and output paths |
//! | `[summary]` | Summary length budgets                    |

mod build;
mod site;
mod summary;

pub use build::{BLOG_DIR, BuildSectionConfig};
pub use site::SiteSectionConfig;
pub use summary::SummarySectionConfig;
