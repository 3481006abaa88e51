//! Magazine registries.
//!
//! # Responsibility
//! - Keep the ordered, append-only list of constructed magazines.
//! - Own the process-wide default registry used by `Magazine::new`.
//!
//! # Invariants
//! - The global registry is empty at startup and only shrinks on an
//!   explicit `reset_global()`.

pub mod magazine_registry;

pub use magazine_registry::MagazineRegistry;

use log::info;
use once_cell::sync::Lazy;

static GLOBAL_REGISTRY: Lazy<MagazineRegistry> = Lazy::new(MagazineRegistry::new);

/// Returns the process-wide registry.
pub fn global() -> &'static MagazineRegistry {
    &GLOBAL_REGISTRY
}

/// Clears the process-wide registry.
///
/// Meant for test isolation; magazines already handed out stay usable.
/// Dropped magazines are not freed: articles and their parents keep each
/// other alive, so any magazine with articles outlives the reset.
pub fn reset_global() {
    let dropped = GLOBAL_REGISTRY.reset();
    info!("event=registry_reset module=registry status=ok scope=global dropped={dropped}");
}
