use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque backend key for a framework. Unique within one `/frameworks` listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameworkId(pub String);

impl FrameworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkDescriptor {
    pub id: FrameworkId,
    pub name: String,
    pub description: String,
}

impl FrameworkDescriptor {
    /// Label shown in the framework selector.
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }
}

/// Quality metrics on a 0-10 scale. Display only; the client never computes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub overall: f64,
    pub clarity: f64,
    pub specificity: f64,
    pub context_richness: f64,
    pub actionability: f64,
}

impl QualityScore {
    /// Metrics in display order, paired with their labels.
    pub fn labeled(&self) -> [(&'static str, f64); 5] {
        [
            ("Overall", self.overall),
            ("Clarity", self.clarity),
            ("Specificity", self.specificity),
            ("Context", self.context_richness),
            ("Actionability", self.actionability),
        ]
    }
}
