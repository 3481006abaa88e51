//! Field constraints shared by entity constructors and mutators.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::model::error::{ModelError, ModelResult};
use log::debug;

/// Minimum length of `Author::name`.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Inclusive bounds of `Magazine::name`.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum length of `Magazine::category`.
pub const MAGAZINE_CATEGORY_MIN_CHARS: usize = 1;
/// Inclusive bounds of `Article::title`.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;
/// An author counts as contributing once they pass this many articles in one magazine.
pub const CONTRIBUTING_AUTHOR_MIN_ARTICLES: usize = 3;

pub(crate) fn author_name(value: &str) -> ModelResult<()> {
    min_chars("name", value, AUTHOR_NAME_MIN_CHARS)
}

pub(crate) fn magazine_name(value: &str) -> ModelResult<()> {
    char_range(
        "name",
        value,
        MAGAZINE_NAME_MIN_CHARS,
        MAGAZINE_NAME_MAX_CHARS,
    )
}

pub(crate) fn magazine_category(value: &str) -> ModelResult<()> {
    min_chars("category", value, MAGAZINE_CATEGORY_MIN_CHARS)
}

pub(crate) fn article_title(value: &str) -> ModelResult<()> {
    char_range(
        "title",
        value,
        ARTICLE_TITLE_MIN_CHARS,
        ARTICLE_TITLE_MAX_CHARS,
    )
}

fn min_chars(field: &'static str, value: &str, min: usize) -> ModelResult<()> {
    let len = value.chars().count();
    if len < min {
        return Err(rejected(
            field,
            len,
            format!("must be at least {min} characters, got {len}"),
        ));
    }
    Ok(())
}

fn char_range(field: &'static str, value: &str, min: usize, max: usize) -> ModelResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(rejected(
            field,
            len,
            format!("must be between {min} and {max} characters, got {len}"),
        ));
    }
    Ok(())
}

fn rejected(field: &'static str, len: usize, reason: String) -> ModelError {
    debug!("event=validate module=model status=error field={field} len={len}");
    ModelError::invalid(field, reason)
}

#[cfg(test)]
mod tests {
    use super::{article_title, author_name, magazine_category, magazine_name};

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(magazine_name("A").is_err());
        assert!(magazine_name("AD").is_ok());
        assert!(magazine_name("Sixteen chars ok").is_ok());
        assert!(magazine_name("Seventeen chars!!").is_err());
    }

    #[test]
    fn article_title_bounds_are_inclusive() {
        assert!(article_title("Four").is_err());
        assert!(article_title("Fiver").is_ok());
        assert!(article_title(&"x".repeat(50)).is_ok());
        assert!(article_title(&"x".repeat(51)).is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 2 chars, 4 bytes
        assert!(magazine_name("éé").is_ok());
        // 16 chars, 32 bytes
        assert!(magazine_name(&"é".repeat(16)).is_ok());
        assert!(article_title(&"ü".repeat(50)).is_ok());
    }

    #[test]
    fn empty_strings_are_rejected() {
        let err = author_name("").expect_err("empty author name must fail");
        assert_eq!(err.field(), "name");
        assert!(err.is_invalid_argument());

        let err = magazine_category("").expect_err("empty category must fail");
        assert_eq!(err.field(), "category");
    }
}
