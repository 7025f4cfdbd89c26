//! Read-only accessor surface over a catalog and its index
//!
//! [`Museum`] is what the presentation layer and the tool-call server hold.
//! Lookups return `None` or empty collections for unknown keys.

use crate::index::CatalogIndex;
use crate::query::{self, SearchCriteria};
use crate::store::Catalog;
use crate::suggest::{self, SuggestRequest, SuggestResponse};
use crate::types::{
    CatalogEntry, CatalogStats, CategoryMembers, CategorySummary, Component,
    ComponentCategoryCount, Element, Layer, Theme, Zone,
};

#[derive(Clone, Debug)]
pub struct Museum {
    catalog: Catalog,
    index: CatalogIndex,
}

impl Museum {
    pub fn new(catalog: Catalog) -> Self {
        let index = CatalogIndex::build(&catalog);
        Self { catalog, index }
    }

    // ========================================================================
    // Collections
    // ========================================================================

    pub fn all_components(&self) -> &[Component] {
        self.catalog.components()
    }

    pub fn all_elements(&self) -> &[Element] {
        self.catalog.elements()
    }

    pub fn all_zones(&self) -> &[Zone] {
        self.catalog.zones()
    }

    pub fn all_themes(&self) -> &[Theme] {
        self.catalog.themes()
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Look an id up among components first, then elements
    pub fn by_id(&self, id: &str) -> Option<CatalogEntry<'_>> {
        self.component_by_id(id)
            .map(CatalogEntry::Component)
            .or_else(|| self.element_by_id(id).map(CatalogEntry::Element))
    }

    pub fn component_by_id(&self, id: &str) -> Option<&Component> {
        self.index
            .component_position(id)
            .map(|pos| &self.catalog.components()[pos])
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.index
            .element_position(id)
            .map(|pos| &self.catalog.elements()[pos])
    }

    pub fn zone_by_id(&self, id: &str) -> Option<&Zone> {
        self.index
            .zone_position(id)
            .map(|pos| &self.catalog.zones()[pos])
    }

    pub fn theme_by_id(&self, id: &str) -> Option<&Theme> {
        self.index
            .theme_position(id)
            .map(|pos| &self.catalog.themes()[pos])
    }

    pub fn elements_by_layer(&self, layer: Layer) -> Vec<&Element> {
        self.elements_at(self.index.layer_positions(layer))
    }

    pub fn by_layer(&self, layer: Layer) -> Vec<&Element> {
        self.elements_by_layer(layer)
    }

    pub fn elements_by_category(&self, category: &str) -> Vec<&Element> {
        self.index
            .element_category_positions(category)
            .map(|positions| self.elements_at(positions))
            .unwrap_or_default()
    }

    pub fn components_by_category(&self, category: &str) -> Vec<&Component> {
        self.index
            .component_category_positions(category)
            .map(|positions| self.components_at(positions))
            .unwrap_or_default()
    }

    /// Members of `category`; element categories win over component categories
    pub fn by_category(&self, category: &str) -> CategoryMembers<'_> {
        if let Some(positions) = self.index.element_category_positions(category) {
            CategoryMembers::Elements(self.elements_at(positions))
        } else if let Some(positions) = self.index.component_category_positions(category) {
            CategoryMembers::Components(self.components_at(positions))
        } else {
            CategoryMembers::Unknown
        }
    }

    pub fn by_zone(&self, zone: &str) -> Vec<&Component> {
        self.components_at(self.index.zone_positions(zone))
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Declared element categories with live counts, optionally for one layer
    pub fn categories(&self, layer: Option<Layer>) -> Vec<CategorySummary> {
        self.catalog
            .categories()
            .iter()
            .filter(|def| layer.map_or(true, |l| def.layer == l))
            .map(|def| CategorySummary {
                id: def.id.clone(),
                name: def.name.clone(),
                description: def.description.clone(),
                icon: def.icon.clone(),
                layer: def.layer,
                count: self.index.element_category_count(def.layer, &def.id),
            })
            .collect()
    }

    pub fn component_categories(&self) -> Vec<ComponentCategoryCount> {
        self.index
            .component_categories()
            .map(|(category, count)| ComponentCategoryCount {
                category: category.to_string(),
                count,
            })
            .collect()
    }

    /// Zones whose name, aesthetic or any tag contains `query`, ignoring case
    ///
    /// Without a query every zone is returned.
    pub fn search_zones(&self, query: Option<&str>) -> Vec<&Zone> {
        let Some(query) = query else {
            return self.catalog.zones().iter().collect();
        };
        let needle = query.to_lowercase();
        self.catalog
            .zones()
            .iter()
            .filter(|zone| zone_matches(zone, &needle))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            components: self.catalog.components().len(),
            elements: self.catalog.elements().len(),
            zones: self.catalog.zones().len(),
            themes: self.catalog.themes().len(),
            categories: self.catalog.categories().len(),
            elements_per_layer: Layer::ALL
                .iter()
                .map(|&layer| (layer, self.index.layer_positions(layer).len()))
                .collect(),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn search_elements(&self, criteria: &SearchCriteria) -> Vec<&Element> {
        match criteria.layer {
            Some(layer) => query::search(
                self.index
                    .layer_positions(layer)
                    .iter()
                    .map(|&pos| &self.catalog.elements()[pos]),
                criteria,
            ),
            None => query::search(self.catalog.elements(), criteria),
        }
    }

    pub fn search_components(&self, criteria: &SearchCriteria) -> Vec<&Component> {
        match criteria.zone.as_deref() {
            Some(zone) => query::search(
                self.index
                    .zone_positions(zone)
                    .iter()
                    .map(|&pos| &self.catalog.components()[pos]),
                criteria,
            ),
            None => query::search(self.catalog.components(), criteria),
        }
    }

    pub fn suggest(&self, request: &SuggestRequest) -> SuggestResponse {
        suggest::suggest(self, request)
    }

    fn elements_at(&self, positions: &[usize]) -> Vec<&Element> {
        positions
            .iter()
            .map(|&pos| &self.catalog.elements()[pos])
            .collect()
    }

    fn components_at(&self, positions: &[usize]) -> Vec<&Component> {
        positions
            .iter()
            .map(|&pos| &self.catalog.components()[pos])
            .collect()
    }
}

pub(crate) fn zone_matches(zone: &Zone, lowered_needle: &str) -> bool {
    zone.name.to_lowercase().contains(lowered_needle)
        || zone.aesthetic.to_lowercase().contains(lowered_needle)
        || zone
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(lowered_needle))
}
