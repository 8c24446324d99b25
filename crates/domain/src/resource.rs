//! Resource names and shapes — the fixed set of portfolio content documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shape of a resource document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single JSON object (profile-style data).
    Object,
    /// An ordered list of items, each carrying an integer `id`.
    Sequence,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => f.write_str("object"),
            Self::Sequence => f.write_str("sequence"),
        }
    }
}

/// The fixed set of content resources exposed by the API.
///
/// Each resource is backed by exactly one JSON document on disk. The
/// lowercase name doubles as the API path segment and the file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceName {
    Hero,
    About,
    Contact,
    Education,
    Skills,
    Certifications,
    Projects,
}

impl ResourceName {
    /// Every resource, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::About,
        Self::Contact,
        Self::Education,
        Self::Skills,
        Self::Certifications,
        Self::Projects,
    ];

    /// Static shape table. Replaces shape-sniffing the on-disk value.
    #[must_use]
    pub fn shape(self) -> Shape {
        match self {
            Self::Hero | Self::About | Self::Contact => Shape::Object,
            Self::Education | Self::Skills | Self::Certifications | Self::Projects => {
                Shape::Sequence
            }
        }
    }

    /// The lowercase path segment / file stem.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
        }
    }

    /// Name of the backing JSON file.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{self}.json")
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a path segment names no known resource.
#[derive(Debug, thiserror::Error)]
#[error("unknown resource {0:?}")]
pub struct UnknownResource(pub String);

impl FromStr for ResourceName {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}
