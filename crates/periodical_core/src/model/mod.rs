//! Author / Magazine / Article object graph.
//!
//! # Responsibility
//! - Validate entity fields at construction and on every mutator.
//! - Link each article into its author and magazine exactly once.
//! - Derive relationship queries from the live graph.
//!
//! # Invariants
//! - Entity identity is the `Uuid` assigned at construction; equal field
//!   values never collapse two entities into one.
//! - The graph is append-only: no entity or link is ever removed.

pub mod article;
pub mod author;
pub mod error;
pub mod magazine;
pub mod sealed;
pub mod validation;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Article lists only grow by whole pushes, so a poisoned lock still guards
// consistent data.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
