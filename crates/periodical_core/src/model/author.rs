//! Author entity.
//!
//! # Invariants
//! - `name` is sealed at construction and never changes.
//! - `articles` holds every article built with this author, in creation order.

use crate::model::article::Article;
use crate::model::error::ModelResult;
use crate::model::magazine::Magazine;
use crate::model::sealed::SealedField;
use crate::model::{read, validation, write};
use log::debug;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Stable identifier of an author.
pub type AuthorId = Uuid;

/// Shared handle to one author node. Clones point at the same author.
#[derive(Clone)]
pub struct Author {
    inner: Arc<AuthorNode>,
}

struct AuthorNode {
    id: AuthorId,
    name: SealedField<String>,
    articles: RwLock<Vec<Article>>,
}

impl Author {
    /// Creates an author with no articles.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is empty.
    pub fn new(name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        validation::author_name(&name)?;

        let id = Uuid::new_v4();
        debug!("event=author_create module=model status=ok id={id}");
        Ok(Self {
            inner: Arc::new(AuthorNode {
                id,
                name: SealedField::sealed("name", name),
                articles: RwLock::new(Vec::new()),
            }),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        self.inner
            .name
            .get()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Always fails: author names are sealed at construction.
    pub fn set_name(&self, name: impl Into<String>) -> ModelResult<()> {
        self.inner.name.set(name.into())
    }

    /// Articles written by this author, in creation order.
    pub fn articles(&self) -> Vec<Article> {
        read(&self.inner.articles).clone()
    }

    /// Distinct magazines this author has written for, in first-seen order.
    pub fn magazines(&self) -> Vec<Magazine> {
        let articles = read(&self.inner.articles);
        let mut seen = HashSet::new();
        articles
            .iter()
            .map(Article::magazine)
            .filter(|magazine| seen.insert(magazine.id()))
            .cloned()
            .collect()
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles at all.
    pub fn topic_areas(&self) -> Option<Vec<String>> {
        let articles = read(&self.inner.articles);
        if articles.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        let mut categories = Vec::new();
        for article in articles.iter() {
            let category = article.magazine().category();
            if seen.insert(category.clone()) {
                categories.push(category);
            }
        }
        Some(categories)
    }

    /// Creates a new article written by this author for `magazine`.
    pub fn add_article(&self, magazine: &Magazine, title: impl Into<String>) -> ModelResult<Article> {
        Article::new(self, magazine, title)
    }

    pub(crate) fn attach(&self, article: Article) {
        write(&self.inner.articles).push(article);
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Author {
    // Articles point back at their author, so only counts are printed.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.inner.id)
            .field("name", &self.name())
            .field("articles", &read(&self.inner.articles).len())
            .finish()
    }
}
