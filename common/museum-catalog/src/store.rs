//! Catalog store: the immutable collections loaded at startup

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::types::{CategoryDef, Component, Element, Theme, Zone};

/// Number of themes every catalog carries
pub const THEME_COUNT: usize = 6;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk catalog document
#[derive(Debug, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Validated, immutable catalog
///
/// The only constructor is [`Catalog::new`], which checks the load-time
/// invariants. Collections keep their document order.
#[derive(Clone, Debug)]
pub struct Catalog {
    components: Vec<Component>,
    elements: Vec<Element>,
    zones: Vec<Zone>,
    themes: Vec<Theme>,
    categories: Vec<CategoryDef>,
}

impl Catalog {
    pub fn new(document: CatalogDocument) -> Result<Self, CatalogError> {
        let CatalogDocument {
            zones,
            themes,
            categories,
            components,
            elements,
        } = document;

        unique_ids("zone", zones.iter().map(|z| z.id.as_str()))?;
        unique_ids("theme", themes.iter().map(|t| t.id.as_str()))?;
        if themes.len() != THEME_COUNT {
            return Err(CatalogError::ThemeCount {
                expected: THEME_COUNT,
                found: themes.len(),
            });
        }

        let component_ids = unique_ids("component", components.iter().map(|c| c.id.as_str()))?;
        unique_ids("element", elements.iter().map(|e| e.id.as_str()))?;
        if let Some(shared) = elements.iter().find(|e| component_ids.contains(e.id.as_str())) {
            return Err(CatalogError::SharedId(shared.id.clone()));
        }

        let zone_ids: HashSet<&str> = zones.iter().map(|z| z.id.as_str()).collect();
        for component in &components {
            if !zone_ids.contains(component.zone.as_str()) {
                return Err(CatalogError::UnknownZone {
                    component: component.id.clone(),
                    zone: component.zone.clone(),
                });
            }
            if component.categories.is_empty() {
                return Err(CatalogError::EmptyCategories(component.id.clone()));
            }
        }

        let mut declared = HashSet::new();
        for def in &categories {
            if !declared.insert((def.layer, def.id.as_str())) {
                return Err(CatalogError::DuplicateCategory {
                    category: def.id.clone(),
                    layer: def.layer,
                });
            }
        }
        for element in &elements {
            if !declared.contains(&(element.layer, element.category.as_str())) {
                return Err(CatalogError::UndeclaredCategory {
                    element: element.id.clone(),
                    category: element.category.clone(),
                    layer: element.layer,
                });
            }
        }

        Ok(Self {
            components,
            elements,
            zones,
            themes,
            categories,
        })
    }

    /// The catalog compiled into this crate
    pub fn builtin() -> Result<Self, CatalogError> {
        debug!("Loading built-in catalog");
        let catalog = Self::from_json_str(BUILTIN_CATALOG)?;
        catalog.log_totals();
        Ok(catalog)
    }

    /// Load a catalog document from disk, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading catalog from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content)?,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };
        catalog.log_totals();
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        Self::new(document)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(content)?;
        Self::new(document)
    }

    fn log_totals(&self) {
        info!(
            components = self.components.len(),
            elements = self.elements.len(),
            zones = self.zones.len(),
            themes = self.themes.len(),
            "Catalog loaded"
        );
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::Layer;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.themes().len(), THEME_COUNT);
        assert!(!catalog.components().is_empty());
        assert!(!catalog.elements().is_empty());
        for layer in Layer::ALL {
            assert!(catalog.elements().iter().any(|e| e.layer == layer));
        }
    }

    #[test]
    fn test_fixture_catalog_is_valid() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.components().len(), 5);
        assert_eq!(catalog.elements().len(), 8);
    }

    #[test]
    fn test_rejects_duplicate_component_id() {
        let mut doc = fixtures::document();
        let dup = doc.components[0].clone();
        doc.components.push(dup);
        let err = Catalog::new(doc).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "component", .. }));
    }

    #[test]
    fn test_rejects_id_shared_between_collections() {
        let mut doc = fixtures::document();
        doc.elements[0].id = doc.components[0].id.clone();
        let err = Catalog::new(doc).unwrap_err();
        assert!(matches!(err, CatalogError::SharedId(_)));
    }

    #[test]
    fn test_rejects_unknown_zone() {
        let mut doc = fixtures::document();
        doc.components[0].zone = "nowhere".to_string();
        let err = Catalog::new(doc).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownZone { .. }));
    }

    #[test]
    fn test_rejects_component_without_categories() {
        let mut doc = fixtures::document();
        doc.components[1].categories.clear();
        let err = Catalog::new(doc).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCategories(id) if id == "neon-hero"));
    }

    #[test]
    fn test_rejects_category_from_other_layer() {
        let mut doc = fixtures::document();
        // "buttons" is only declared for atoms
        doc.elements[0].layer = Layer::Organism;
        let err = Catalog::new(doc).unwrap_err();
        assert!(matches!(err, CatalogError::UndeclaredCategory { .. }));
    }

    #[test]
    fn test_rejects_wrong_theme_count() {
        let mut doc = fixtures::document();
        doc.themes.pop();
        let err = Catalog::new(doc).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ThemeCount {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, "zones: []").unwrap();
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, BUILTIN_CATALOG).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(
            catalog.elements().len(),
            Catalog::builtin().unwrap().elements().len()
        );
    }
}
