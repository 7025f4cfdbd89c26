//! Response shapes returned by the museum tools

use museum_catalog::{CategorySummary, Component, Element, Theme, Zone};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ElementsResponse<'a> {
    pub count: usize,
    pub elements: Vec<&'a Element>,
}

#[derive(Debug, Serialize)]
pub struct ComponentsResponse<'a> {
    pub count: usize,
    pub components: Vec<&'a Component>,
}

#[derive(Debug, Serialize)]
pub struct ThemesResponse<'a> {
    pub count: usize,
    pub themes: &'a [Theme],
}

#[derive(Debug, Serialize)]
pub struct ZonesResponse<'a> {
    pub count: usize,
    pub zones: Vec<&'a Zone>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub count: usize,
    pub categories: Vec<CategorySummary>,
}

/// A zone together with the components exhibited in it
#[derive(Debug, Serialize)]
pub struct ZoneDetail<'a> {
    #[serde(flatten)]
    pub zone: &'a Zone,
    pub component_count: usize,
    pub components: Vec<&'a Component>,
}
