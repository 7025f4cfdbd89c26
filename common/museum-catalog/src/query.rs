//! Faceted search over catalog entries
//!
//! Facets combine with logical AND. The tag facet is an OR across the given
//! tags, and an empty tag list imposes no constraint. Results keep catalog
//! order; there is no relevance ranking.

use serde::{Deserialize, Serialize};

use crate::types::{Component, Element, Layer};

/// Result count used when criteria carry no limit
pub const DEFAULT_LIMIT: usize = 10;

/// Search criteria; every field is optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Case-insensitive substring matched against name, description and tags
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub layer: Option<Layer>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    /// Matches entries carrying at least one of these tags
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Catalog entry that can be matched against [`SearchCriteria`]
pub trait Searchable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn tags(&self) -> &[String];
    fn in_category(&self, category: &str) -> bool;

    /// `None` for entries that are not layered
    fn layer(&self) -> Option<Layer> {
        None
    }

    /// `None` for entries that are not zone-scoped
    fn zone(&self) -> Option<&str> {
        None
    }
}

impl Searchable for Element {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn in_category(&self, category: &str) -> bool {
        self.category == category
    }

    fn layer(&self) -> Option<Layer> {
        Some(self.layer)
    }
}

impl Searchable for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    fn zone(&self) -> Option<&str> {
        Some(&self.zone)
    }
}

/// Whether `entry` satisfies every facet in `criteria`
///
/// `lowered_query` is the criteria's query, already lower-cased.
fn matches<T: Searchable>(
    entry: &T,
    criteria: &SearchCriteria,
    lowered_query: Option<&str>,
) -> bool {
    if let Some(layer) = criteria.layer {
        if entry.layer() != Some(layer) {
            return false;
        }
    }

    if let Some(zone) = criteria.zone.as_deref() {
        if entry.zone() != Some(zone) {
            return false;
        }
    }

    if let Some(category) = criteria.category.as_deref() {
        if !entry.in_category(category) {
            return false;
        }
    }

    if !criteria.tags.is_empty() && !criteria.tags.iter().any(|t| entry.tags().contains(t)) {
        return false;
    }

    match lowered_query {
        Some(needle) => text_matches(entry, needle),
        None => true,
    }
}

fn text_matches<T: Searchable>(entry: &T, needle: &str) -> bool {
    entry.name().to_lowercase().contains(needle)
        || entry.description().to_lowercase().contains(needle)
        || entry.tags().iter().any(|t| t.to_lowercase().contains(needle))
}

/// Filter `candidates` by `criteria`, keeping their order, then truncate to the limit
pub fn search<'a, T, I>(candidates: I, criteria: &SearchCriteria) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let lowered = criteria.query.as_deref().map(str::to_lowercase);
    let limit = criteria.effective_limit();

    candidates
        .into_iter()
        .filter(|entry| matches(*entry, criteria, lowered.as_deref()))
        .take(limit)
        .collect()
}
