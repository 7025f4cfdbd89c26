//! Core types for the component museum catalog

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Atomic-design tier of an [`Element`]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Atom,
    Molecule,
    Organism,
    Template,
}

impl Layer {
    /// All layers, smallest to largest
    pub const ALL: [Layer; 4] = [Layer::Atom, Layer::Molecule, Layer::Organism, Layer::Template];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Atom => "atom",
            Layer::Molecule => "molecule",
            Layer::Organism => "organism",
            Layer::Template => "template",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atom" => Ok(Layer::Atom),
            "molecule" => Ok(Layer::Molecule),
            "organism" => Ok(Layer::Organism),
            "template" => Ok(Layer::Template),
            other => Err(format!("unknown layer: {}", other)),
        }
    }
}

/// Zone-scoped catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Component {
    /// Unique across both components and elements
    pub id: String,
    pub name: String,
    pub description: String,
    /// Id of the zone this component is exhibited in
    pub zone: String,
    /// Category tags (never empty)
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_interactive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_size: Option<String>,
}

/// Atomic-design catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub description: String,
    pub layer: Layer,
    /// Category id, declared for this element's layer
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Themed grouping of components
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// Free-text description of the zone's look and feel
    pub aesthetic: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Colors, gradients and other display fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub theming: BTreeMap<String, String>,
}

/// Color theme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

/// Declared element category for one layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryDef {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub layer: Layer,
}

/// Category definition together with its live element count
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub layer: Layer,
    pub count: usize,
}

/// Component category with the number of components carrying it
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct ComponentCategoryCount {
    pub category: String,
    pub count: usize,
}

/// Result of a lookup that spans both collections
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry<'a> {
    Component(&'a Component),
    Element(&'a Element),
}

impl<'a> CatalogEntry<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            CatalogEntry::Component(c) => &c.id,
            CatalogEntry::Element(e) => &e.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            CatalogEntry::Component(c) => &c.name,
            CatalogEntry::Element(e) => &e.name,
        }
    }
}

/// Members of a category, from whichever collection owns the category id
#[derive(Clone, Debug, PartialEq)]
pub enum CategoryMembers<'a> {
    Elements(Vec<&'a Element>),
    Components(Vec<&'a Component>),
    Unknown,
}

impl CategoryMembers<'_> {
    pub fn len(&self) -> usize {
        match self {
            CategoryMembers::Elements(v) => v.len(),
            CategoryMembers::Components(v) => v.len(),
            CategoryMembers::Unknown => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Catalog totals
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct CatalogStats {
    pub components: usize,
    pub elements: usize,
    pub zones: usize,
    pub themes: usize,
    pub categories: usize,
    /// Element count per layer, in atomic-design order
    pub elements_per_layer: BTreeMap<Layer, usize>,
}
