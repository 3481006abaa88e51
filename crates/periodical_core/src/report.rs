//! Serializable snapshots of query results.
//!
//! Summaries are computed from the live graph at call time and do not track
//! later mutations. Absent query results stay `None` (`null` on the wire).

use crate::model::article::ArticleId;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::registry::MagazineRegistry;
use serde::{Deserialize, Serialize};

/// Snapshot of one author and its derived queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub name: String,
    pub article_ids: Vec<ArticleId>,
    pub magazine_ids: Vec<MagazineId>,
    pub topic_areas: Option<Vec<String>>,
}

impl AuthorSummary {
    pub fn from_author(author: &Author) -> Self {
        Self {
            id: author.id(),
            name: author.name().to_string(),
            article_ids: author.articles().iter().map(|article| article.id()).collect(),
            magazine_ids: author.magazines().iter().map(Magazine::id).collect(),
            topic_areas: author.topic_areas(),
        }
    }
}

/// Snapshot of one magazine and its derived queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineSummary {
    pub id: MagazineId,
    pub name: String,
    pub category: String,
    pub article_count: usize,
    pub article_titles: Option<Vec<String>>,
    pub contributor_ids: Vec<AuthorId>,
    pub contributing_author_ids: Option<Vec<AuthorId>>,
}

impl MagazineSummary {
    pub fn from_magazine(magazine: &Magazine) -> Self {
        Self {
            id: magazine.id(),
            name: magazine.name(),
            category: magazine.category(),
            article_count: magazine.article_count(),
            article_titles: magazine.article_titles(),
            contributor_ids: magazine.contributors().iter().map(Author::id).collect(),
            contributing_author_ids: magazine
                .contributing_authors()
                .map(|authors| authors.iter().map(Author::id).collect()),
        }
    }
}

/// Snapshot of a whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub magazines: Vec<MagazineSummary>,
    pub top_publisher_id: Option<MagazineId>,
}

impl CatalogReport {
    pub fn from_registry(registry: &MagazineRegistry) -> Self {
        Self {
            magazines: registry
                .all_magazines()
                .iter()
                .map(MagazineSummary::from_magazine)
                .collect(),
            top_publisher_id: registry.top_publisher().map(|magazine| magazine.id()),
        }
    }
}
