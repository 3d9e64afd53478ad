//! Knowledge catalog entries.

use serde::Serialize;

/// One item in the static knowledge catalog.
///
/// The catalog is baked into the binary, so everything borrows `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeItem {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}
