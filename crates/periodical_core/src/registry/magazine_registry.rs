//! Append-only magazine registry.

use crate::model::magazine::Magazine;
use crate::model::{read, write};
use log::debug;
use std::sync::RwLock;

/// Ordered collection of every magazine constructed against it.
#[derive(Debug, Default)]
pub struct MagazineRegistry {
    magazines: RwLock<Vec<Magazine>>,
}

impl MagazineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one magazine. Called from magazine construction only.
    pub(crate) fn register(&self, magazine: Magazine) {
        let mut magazines = write(&self.magazines);
        magazines.push(magazine);
        debug!(
            "event=magazine_register module=registry status=ok size={}",
            magazines.len()
        );
    }

    pub fn len(&self) -> usize {
        read(&self.magazines).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.magazines).is_empty()
    }

    pub fn contains(&self, magazine: &Magazine) -> bool {
        read(&self.magazines).contains(magazine)
    }

    /// Snapshot of all registered magazines, in creation order.
    pub fn all_magazines(&self) -> Vec<Magazine> {
        read(&self.magazines).clone()
    }

    /// Returns the magazine with the strictly greatest article count.
    ///
    /// The first magazine in registration order wins ties. Magazines without
    /// articles never qualify, so a registry of empty magazines yields `None`.
    pub fn top_publisher(&self) -> Option<Magazine> {
        let magazines = read(&self.magazines);
        let mut top: Option<&Magazine> = None;
        let mut max_articles = 0;
        for magazine in magazines.iter() {
            let count = magazine.article_count();
            if count > max_articles {
                max_articles = count;
                top = Some(magazine);
            }
        }
        top.cloned()
    }

    /// Removes every magazine and returns how many were dropped.
    pub fn reset(&self) -> usize {
        let mut magazines = write(&self.magazines);
        let dropped = magazines.len();
        magazines.clear();
        dropped
    }
}
