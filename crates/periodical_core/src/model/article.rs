//! Article entity: the link between one author and one magazine.
//!
//! # Invariants
//! - `author` and `magazine` are fixed at construction.
//! - `title` is sealed at construction (5..=50 characters).
//! - A constructed article is already present in both
//!   `author.articles()` and `magazine.articles()`.

use crate::model::author::Author;
use crate::model::error::ModelResult;
use crate::model::magazine::Magazine;
use crate::model::sealed::SealedField;
use crate::model::validation;
use log::debug;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// Stable identifier of an article.
pub type ArticleId = Uuid;

/// Shared handle to one article node. Clones point at the same article.
#[derive(Clone)]
pub struct Article {
    inner: Arc<ArticleNode>,
}

struct ArticleNode {
    id: ArticleId,
    author: Author,
    magazine: Magazine,
    title: SealedField<String>,
}

impl Article {
    /// Creates an article and links it into `author` and `magazine`.
    ///
    /// # Errors
    /// - `InvalidArgument` when `title` is outside 5..=50 characters. Neither
    ///   parent is touched in that case.
    pub fn new(author: &Author, magazine: &Magazine, title: impl Into<String>) -> ModelResult<Self> {
        let title = title.into();
        validation::article_title(&title)?;

        let article = Self {
            inner: Arc::new(ArticleNode {
                id: Uuid::new_v4(),
                author: author.clone(),
                magazine: magazine.clone(),
                title: SealedField::sealed("title", title),
            }),
        };
        author.attach(article.clone());
        magazine.attach(article.clone());
        debug!(
            "event=article_create module=model status=ok id={} author_id={} magazine_id={}",
            article.id(),
            author.id(),
            magazine.id()
        );
        Ok(article)
    }

    pub fn id(&self) -> ArticleId {
        self.inner.id
    }

    pub fn author(&self) -> &Author {
        &self.inner.author
    }

    pub fn magazine(&self) -> &Magazine {
        &self.inner.magazine
    }

    pub fn title(&self) -> &str {
        self.inner
            .title
            .get()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Attempts to replace the title.
    ///
    /// # Errors
    /// - `InvalidArgument` when `title` is outside 5..=50 characters.
    /// - `ImmutableField` otherwise, since the title is sealed at construction.
    pub fn set_title(&self, title: impl Into<String>) -> ModelResult<()> {
        let title = title.into();
        validation::article_title(&title)?;
        self.inner.title.set(title)
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Article")
            .field("id", &self.inner.id)
            .field("title", &self.title())
            .field("author_id", &self.inner.author.id())
            .field("magazine_id", &self.inner.magazine.id())
            .finish()
    }
}
