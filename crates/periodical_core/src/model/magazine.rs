//! Magazine entity.
//!
//! # Invariants
//! - `name` stays within 2..=16 characters and `category` is never empty,
//!   both at construction and after every mutator call.
//! - Every constructed magazine is appended to exactly one registry.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::error::ModelResult;
use crate::model::validation::{self, CONTRIBUTING_AUTHOR_MIN_ARTICLES};
use crate::model::{read, write};
use crate::registry::{self, MagazineRegistry};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Stable identifier of a magazine.
pub type MagazineId = Uuid;

/// Shared handle to one magazine node. Clones point at the same magazine.
#[derive(Clone)]
pub struct Magazine {
    inner: Arc<MagazineNode>,
}

struct MagazineNode {
    id: MagazineId,
    name: RwLock<String>,
    category: RwLock<String>,
    articles: RwLock<Vec<Article>>,
}

impl Magazine {
    /// Creates a magazine and appends it to the process-wide registry.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is outside 2..=16 characters.
    /// - `InvalidArgument` when `category` is empty.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> ModelResult<Self> {
        Self::new_in(registry::global(), name, category)
    }

    /// Creates a magazine and appends it to `registry`.
    ///
    /// Validation runs before registration; a rejected magazine is never
    /// visible in any registry.
    pub fn new_in(
        registry: &MagazineRegistry,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ModelResult<Self> {
        let name = name.into();
        let category = category.into();
        validation::magazine_name(&name)?;
        validation::magazine_category(&category)?;

        let magazine = Self {
            inner: Arc::new(MagazineNode {
                id: Uuid::new_v4(),
                name: RwLock::new(name),
                category: RwLock::new(category),
                articles: RwLock::new(Vec::new()),
            }),
        };
        debug!(
            "event=magazine_create module=model status=ok id={}",
            magazine.id()
        );
        registry.register(magazine.clone());
        Ok(magazine)
    }

    pub fn id(&self) -> MagazineId {
        self.inner.id
    }

    pub fn name(&self) -> String {
        read(&self.inner.name).clone()
    }

    /// Renames the magazine.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is outside 2..=16 characters; the
    ///   current name is kept.
    pub fn set_name(&self, name: impl Into<String>) -> ModelResult<()> {
        let name = name.into();
        validation::magazine_name(&name)?;
        *write(&self.inner.name) = name;
        Ok(())
    }

    pub fn category(&self) -> String {
        read(&self.inner.category).clone()
    }

    /// Moves the magazine to another category.
    ///
    /// # Errors
    /// - `InvalidArgument` when `category` is empty; the current category is kept.
    pub fn set_category(&self, category: impl Into<String>) -> ModelResult<()> {
        let category = category.into();
        validation::magazine_category(&category)?;
        *write(&self.inner.category) = category;
        Ok(())
    }

    /// Articles published by this magazine, in creation order.
    pub fn articles(&self) -> Vec<Article> {
        read(&self.inner.articles).clone()
    }

    pub fn article_count(&self) -> usize {
        read(&self.inner.articles).len()
    }

    /// Distinct authors who wrote for this magazine, in first-seen order.
    pub fn contributors(&self) -> Vec<Author> {
        let articles = read(&self.inner.articles);
        let mut seen = HashSet::new();
        articles
            .iter()
            .map(Article::author)
            .filter(|author| seen.insert(author.id()))
            .cloned()
            .collect()
    }

    /// Titles of every article, in creation order.
    ///
    /// Returns `None` when the magazine has no articles.
    pub fn article_titles(&self) -> Option<Vec<String>> {
        let articles = read(&self.inner.articles);
        if articles.is_empty() {
            return None;
        }
        Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        )
    }

    /// Authors with more than two articles in this magazine, in order of
    /// their first article.
    ///
    /// Returns `None` when no author qualifies, including when the magazine
    /// has no articles.
    pub fn contributing_authors(&self) -> Option<Vec<Author>> {
        let articles = read(&self.inner.articles);
        let mut slots: HashMap<_, usize> = HashMap::new();
        let mut counts: Vec<(&Author, usize)> = Vec::new();
        for article in articles.iter() {
            let author = article.author();
            let slot = *slots.entry(author.id()).or_insert_with(|| {
                counts.push((author, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        let qualified: Vec<Author> = counts
            .into_iter()
            .filter(|(_, count)| *count >= CONTRIBUTING_AUTHOR_MIN_ARTICLES)
            .map(|(author, _)| author.clone())
            .collect();
        if qualified.is_empty() {
            None
        } else {
            Some(qualified)
        }
    }

    /// Every magazine in the process-wide registry, in creation order.
    pub fn all_magazines() -> Vec<Magazine> {
        registry::global().all_magazines()
    }

    /// Magazine with the most articles in the process-wide registry.
    ///
    /// See [`MagazineRegistry::top_publisher`] for tie-breaking.
    pub fn top_publisher() -> Option<Magazine> {
        registry::global().top_publisher()
    }

    pub(crate) fn attach(&self, article: Article) {
        write(&self.inner.articles).push(article);
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Magazine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Magazine")
            .field("id", &self.inner.id)
            .field("name", &self.name())
            .field("category", &self.category())
            .field("articles", &self.article_count())
            .finish()
    }
}
