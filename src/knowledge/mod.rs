//! Knowledge base of cultural terms.
//!
//! An explicit ordered list, not a map, so the first-declared-term-wins
//! tie-break is deterministic.

mod base;
mod entry;
mod glossary;

pub use base::{KnowledgeBase, KnowledgeBaseBuilder};
pub use entry::KnowledgeEntry;
