//! Core domain model for Periodical.
//! Authors, magazines and the articles linking them, with field validation
//! and relationship queries.

pub mod logging;
pub mod model;
pub mod registry;
pub mod report;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::error::{ModelError, ModelResult};
pub use model::magazine::{Magazine, MagazineId};
pub use model::sealed::SealedField;
pub use model::validation::{
    ARTICLE_TITLE_MAX_CHARS, ARTICLE_TITLE_MIN_CHARS, AUTHOR_NAME_MIN_CHARS,
    CONTRIBUTING_AUTHOR_MIN_ARTICLES, MAGAZINE_CATEGORY_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS,
    MAGAZINE_NAME_MIN_CHARS,
};
pub use registry::{reset_global, MagazineRegistry};
pub use report::{AuthorSummary, CatalogReport, MagazineSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
