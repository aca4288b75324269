// 🏷️ Categories - Which kind of entity a lookup targets
// Each category picks its own SPARQL template

use crate::error::LookupError;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// People (type:Person)
    Person,

    /// Places (type:Place)
    Place,

    /// Organizations (type:Agent)
    Organization,

    /// Works, matched on their label
    Title,

    /// Any typed subject, matched on any property value ("RS")
    FreeformSubject,
}

impl Category {
    /// All categories, in lookup order
    pub const ALL: [Category; 5] = [
        Category::Person,
        Category::Place,
        Category::Organization,
        Category::Title,
        Category::FreeformSubject,
    ];

    /// Label written into `nameType` on every result
    pub fn label(&self) -> &'static str {
        match self {
            Category::Person => "Person",
            Category::Place => "Place",
            Category::Organization => "Organization",
            Category::Title => "Title",
            Category::FreeformSubject => "RS",
        }
    }

    /// RDF type the subject must declare, if any
    ///
    /// Title and FreeformSubject return `None`: Title filters on the label
    /// instead, FreeformSubject accepts any type.
    pub fn type_id(&self) -> Option<&'static str> {
        match self {
            Category::Person => Some("type:Person"),
            Category::Place => Some("type:Place"),
            Category::Organization => Some("type:Agent"),
            Category::Title | Category::FreeformSubject => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "person" => Ok(Category::Person),
            "place" => Ok(Category::Place),
            "organization" | "org" => Ok(Category::Organization),
            "title" => Ok(Category::Title),
            "rs" | "freeform" | "freeformsubject" | "subject" => Ok(Category::FreeformSubject),
            other => Err(LookupError::InvalidQuery(format!(
                "unknown category '{}' (expected person, place, organization, title or rs)",
                other
            ))),
        }
    }
}
