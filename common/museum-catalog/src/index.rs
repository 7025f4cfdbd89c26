//! Derived lookup maps over a [`Catalog`]
//!
//! Every map stores positions into the catalog's collections. Position lists
//! are ascending, so iterating one yields entries in catalog order.

use std::collections::HashMap;

use crate::store::Catalog;
use crate::types::Layer;

#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    component_by_id: HashMap<String, usize>,
    element_by_id: HashMap<String, usize>,
    zone_by_id: HashMap<String, usize>,
    theme_by_id: HashMap<String, usize>,
    elements_by_layer: HashMap<Layer, Vec<usize>>,
    elements_by_category: HashMap<String, Vec<usize>>,
    element_category_counts: HashMap<(Layer, String), usize>,
    components_by_category: HashMap<String, Vec<usize>>,
    components_by_zone: HashMap<String, Vec<usize>>,
    /// Component categories in order of first appearance
    component_category_order: Vec<String>,
}

impl CatalogIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::default();

        for (pos, component) in catalog.components().iter().enumerate() {
            index.component_by_id.insert(component.id.clone(), pos);
            index
                .components_by_zone
                .entry(component.zone.clone())
                .or_default()
                .push(pos);
            for category in &component.categories {
                let members = index
                    .components_by_category
                    .entry(category.clone())
                    .or_default();
                if members.is_empty() {
                    index.component_category_order.push(category.clone());
                }
                // A component listing the same category twice is indexed once
                if members.last() != Some(&pos) {
                    members.push(pos);
                }
            }
        }

        for (pos, element) in catalog.elements().iter().enumerate() {
            index.element_by_id.insert(element.id.clone(), pos);
            index
                .elements_by_layer
                .entry(element.layer)
                .or_default()
                .push(pos);
            index
                .elements_by_category
                .entry(element.category.clone())
                .or_default()
                .push(pos);
            *index
                .element_category_counts
                .entry((element.layer, element.category.clone()))
                .or_default() += 1;
        }

        for (pos, zone) in catalog.zones().iter().enumerate() {
            index.zone_by_id.insert(zone.id.clone(), pos);
        }
        for (pos, theme) in catalog.themes().iter().enumerate() {
            index.theme_by_id.insert(theme.id.clone(), pos);
        }

        index
    }

    pub fn component_position(&self, id: &str) -> Option<usize> {
        self.component_by_id.get(id).copied()
    }

    pub fn element_position(&self, id: &str) -> Option<usize> {
        self.element_by_id.get(id).copied()
    }

    pub fn zone_position(&self, id: &str) -> Option<usize> {
        self.zone_by_id.get(id).copied()
    }

    pub fn theme_position(&self, id: &str) -> Option<usize> {
        self.theme_by_id.get(id).copied()
    }

    pub fn layer_positions(&self, layer: Layer) -> &[usize] {
        self.elements_by_layer
            .get(&layer)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn element_category_positions(&self, category: &str) -> Option<&[usize]> {
        self.elements_by_category.get(category).map(Vec::as_slice)
    }

    pub fn component_category_positions(&self, category: &str) -> Option<&[usize]> {
        self.components_by_category.get(category).map(Vec::as_slice)
    }

    pub fn zone_positions(&self, zone: &str) -> &[usize] {
        self.components_by_zone
            .get(zone)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Live number of elements in `category` on `layer`
    pub fn element_category_count(&self, layer: Layer, category: &str) -> usize {
        self.element_category_counts
            .get(&(layer, category.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn component_categories(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.component_category_order.iter().map(|category| {
            let count = self
                .components_by_category
                .get(category)
                .map_or(0, Vec::len);
            (category.as_str(), count)
        })
    }
}
