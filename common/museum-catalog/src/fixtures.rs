//! Small synthetic catalog shared by unit tests

use std::collections::BTreeMap;

use crate::store::{Catalog, CatalogDocument};
use crate::types::{CategoryDef, Component, Element, Layer, Theme, Zone};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn zone(id: &str, name: &str, aesthetic: &str, tags: &[&str]) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        aesthetic: aesthetic.to_string(),
        tags: strings(tags),
        theming: BTreeMap::new(),
    }
}

fn component(id: &str, zone: &str, categories: &[&str], tags: &[&str]) -> Component {
    Component {
        id: id.to_string(),
        name: id.replace('-', " "),
        description: format!("Fixture component {}", id),
        zone: zone.to_string(),
        categories: strings(categories),
        tags: strings(tags),
        is_interactive: false,
        source_project: None,
        source_file: None,
        preview_size: None,
    }
}

fn element(id: &str, layer: Layer, category: &str, description: &str, tags: &[&str]) -> Element {
    Element {
        id: id.to_string(),
        name: id.replace('-', " "),
        description: description.to_string(),
        layer,
        category: category.to_string(),
        tags: strings(tags),
    }
}

fn category(id: &str, layer: Layer) -> CategoryDef {
    CategoryDef {
        id: id.to_string(),
        name: id.to_string(),
        description: format!("{} {}", layer, id),
        icon: String::new(),
        layer,
    }
}

pub(crate) fn document() -> CatalogDocument {
    CatalogDocument {
        zones: vec![
            zone("arcade", "Arcade Basement", "retro pixel arcade", &["retro", "pixel"]),
            zone("neon", "Neon Alley", "cyberpunk signage", &["neon", "glow"]),
            zone("glass", "Glass Conservatory", "frosted glassmorphism", &["glass", "minimal"]),
        ],
        themes: (1..=6)
            .map(|i| Theme {
                id: format!("theme-{}", i),
                name: format!("Theme {}", i),
                description: String::new(),
                palette: BTreeMap::new(),
            })
            .collect(),
        categories: vec![
            category("buttons", Layer::Atom),
            category("inputs", Layer::Atom),
            category("forms", Layer::Molecule),
            category("cards", Layer::Molecule),
            category("heroes", Layer::Organism),
            category("testimonials", Layer::Organism),
            category("landing-pages", Layer::Template),
        ],
        components: vec![
            component("arcade-hero", "arcade", &["hero"], &["hero", "retro"]),
            component("neon-hero", "neon", &["hero"], &["hero", "neon", "glow"]),
            component("neon-button", "neon", &["buttons"], &["button", "neon"]),
            component("glass-hero", "glass", &["hero", "backgrounds"], &["hero", "glass"]),
            component("glass-card", "glass", &["cards"], &["card", "glass"]),
        ],
        elements: vec![
            element(
                "button-primary",
                Layer::Atom,
                "buttons",
                "Solid primary action",
                &["button", "cta"],
            ),
            element(
                "text-input",
                Layer::Atom,
                "inputs",
                "Single line text field",
                &["input", "form"],
            ),
            element(
                "login-form",
                Layer::Molecule,
                "forms",
                "Email and password sign in",
                &["form", "login", "auth"],
            ),
            element(
                "feature-card",
                Layer::Molecule,
                "cards",
                "Card with icon and soft shadow",
                &["card"],
            ),
            element(
                "hero-split",
                Layer::Organism,
                "heroes",
                "Split hero with image",
                &["hero", "landing", "cta"],
            ),
            element(
                "hero-centered",
                Layer::Organism,
                "heroes",
                "Centered headline hero",
                &["hero", "landing"],
            ),
            element(
                "testimonial-wall",
                Layer::Organism,
                "testimonials",
                "Wall of customer quotes",
                &["testimonial", "social-proof"],
            ),
            element(
                "saas-landing",
                Layer::Template,
                "landing-pages",
                "Full marketing page",
                &["landing", "marketing"],
            ),
        ],
    }
}

pub(crate) fn catalog() -> Catalog {
    Catalog::new(document()).expect("fixture catalog is valid")
}
