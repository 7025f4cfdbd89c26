//! Keyword-driven component suggestions
//!
//! A description is lower-cased once and tested against a fixed table of
//! intent buckets. Every bucket whose keywords appear contributes the results
//! of its own bounded element searches, tagged with a fixed reason. Buckets are
//! independent, so one description can draw from several of them.

use serde::{Deserialize, Serialize};

use crate::museum::{zone_matches, Museum};
use crate::query::{SearchCriteria, DEFAULT_LIMIT};
use crate::types::Element;

/// Reason attached to every result of the free-text fallback
pub const FALLBACK_REASON: &str = "Matches your description";

/// Intent recognised in a natural-language description
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentBucket {
    Landing,
    Pricing,
    Form,
    Navigation,
    Cards,
    Testimonial,
}

/// Filter applied by one bucket query
#[derive(Clone, Copy, Debug)]
pub enum BucketFilter {
    Tags(&'static [&'static str]),
    Category(&'static str),
}

/// One bounded search issued when a bucket fires
#[derive(Clone, Copy, Debug)]
pub struct BucketQuery {
    pub filter: BucketFilter,
    pub limit: usize,
    pub reason: &'static str,
}

impl BucketQuery {
    pub fn criteria(&self) -> SearchCriteria {
        let criteria = SearchCriteria::new().with_limit(self.limit);
        match self.filter {
            BucketFilter::Tags(tags) => criteria.with_tags(tags.iter().copied()),
            BucketFilter::Category(category) => criteria.with_category(category),
        }
    }
}

/// Keywords and queries owned by a bucket
#[derive(Debug)]
pub struct BucketRule {
    pub bucket: IntentBucket,
    pub keywords: &'static [&'static str],
    pub queries: &'static [BucketQuery],
}

impl BucketRule {
    /// Whether any keyword occurs in the already lower-cased description
    pub fn fires(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Bucket table, in evaluation order
pub static BUCKET_RULES: &[BucketRule] = &[
    BucketRule {
        bucket: IntentBucket::Landing,
        keywords: &["landing", "homepage", "marketing"],
        queries: &[
            BucketQuery {
                filter: BucketFilter::Tags(&["hero"]),
                limit: 2,
                reason: "Hero section for landing pages",
            },
            BucketQuery {
                filter: BucketFilter::Tags(&["cta"]),
                limit: 2,
                reason: "Call-to-action to drive conversions",
            },
        ],
    },
    BucketRule {
        bucket: IntentBucket::Pricing,
        keywords: &["pricing", "plans", "subscription"],
        queries: &[BucketQuery {
            filter: BucketFilter::Category("pricing"),
            limit: 3,
            reason: "Pricing display for plans and tiers",
        }],
    },
    BucketRule {
        bucket: IntentBucket::Form,
        keywords: &["form", "login", "signup", "auth"],
        queries: &[
            BucketQuery {
                filter: BucketFilter::Category("forms"),
                limit: 3,
                reason: "Form components for user input",
            },
            BucketQuery {
                filter: BucketFilter::Category("buttons"),
                limit: 2,
                reason: "Buttons for form submission",
            },
        ],
    },
    BucketRule {
        bucket: IntentBucket::Navigation,
        keywords: &["navigation", "nav", "header", "footer"],
        queries: &[BucketQuery {
            filter: BucketFilter::Tags(&["nav"]),
            limit: 3,
            reason: "Navigation components",
        }],
    },
    BucketRule {
        bucket: IntentBucket::Cards,
        keywords: &["card", "grid", "list"],
        queries: &[BucketQuery {
            filter: BucketFilter::Category("cards"),
            limit: 4,
            reason: "Card layouts for displaying content",
        }],
    },
    BucketRule {
        bucket: IntentBucket::Testimonial,
        keywords: &["testimonial", "review", "social proof"],
        queries: &[BucketQuery {
            filter: BucketFilter::Tags(&["social-proof"]),
            limit: 2,
            reason: "Social proof and testimonials",
        }],
    },
];

impl IntentBucket {
    /// The table row owned by this bucket; rows follow declaration order
    pub fn rule(self) -> &'static BucketRule {
        &BUCKET_RULES[self as usize]
    }
}

/// Buckets whose keywords appear in `description`, in table order
pub fn classify(description: &str) -> Vec<IntentBucket> {
    let lowered = description.to_lowercase();
    BUCKET_RULES
        .iter()
        .filter(|rule| rule.fires(&lowered))
        .map(|rule| rule.bucket)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub description: String,
    #[serde(default)]
    pub aesthetic: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SuggestRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_aesthetic(mut self, aesthetic: impl Into<String>) -> Self {
        self.aesthetic = Some(aesthetic.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// An element recommended for a description
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub element: Element,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_zone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SuggestResponse {
    /// The description as given
    pub query: String,
    pub aesthetic: Option<String>,
    pub count: usize,
    pub suggestions: Vec<Suggestion>,
}

pub fn suggest(museum: &Museum, request: &SuggestRequest) -> SuggestResponse {
    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    let lowered = request.description.to_lowercase();

    let mut suggestions = Vec::new();
    if !lowered.trim().is_empty() {
        let mut fired = false;
        for rule in BUCKET_RULES.iter().filter(|rule| rule.fires(&lowered)) {
            fired = true;
            for query in rule.queries {
                collect(&mut suggestions, museum, &query.criteria(), query.reason);
            }
        }

        if !fired {
            let criteria = SearchCriteria::new()
                .with_query(request.description.clone())
                .with_limit(limit);
            collect(&mut suggestions, museum, &criteria, FALLBACK_REASON);
        }
    }
    suggestions.truncate(limit);

    if let Some(zone) = request
        .aesthetic
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .and_then(|a| {
            let needle = a.to_lowercase();
            museum.all_zones().iter().find(|z| zone_matches(z, &needle))
        })
    {
        for suggestion in &mut suggestions {
            suggestion.suggested_zone = Some(zone.name.clone());
        }
    }

    SuggestResponse {
        query: request.description.clone(),
        aesthetic: request.aesthetic.clone(),
        count: suggestions.len(),
        suggestions,
    }
}

fn collect(out: &mut Vec<Suggestion>, museum: &Museum, criteria: &SearchCriteria, reason: &str) {
    out.extend(
        museum
            .search_elements(criteria)
            .into_iter()
            .map(|element| Suggestion {
                element: element.clone(),
                reason: reason.to_string(),
                suggested_zone: None,
            }),
    );
}
