//! Shared types for the tool directory.

use serde::Serialize;

/// A row as it appears in the CSV resource, before normalization.
///
/// All fields are optional at this stage; rows are matched by header name,
/// so a short or reordered row simply leaves fields unset.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// The free-text `Type` column, verbatim.
    pub kind: Option<String>,
}

/// Closed category for bucket partitioning.
///
/// Derived once at the normalization boundary; downstream code never
/// re-validates the raw type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "AI")]
    Ai,
    Analytics,
    Other,
}

impl Category {
    /// Classify a free-text type label, case-insensitively.
    ///
    /// Anything that is not `ai` or `analytics` lands in [`Category::Other`],
    /// including blank and custom labels.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("ai") {
            Self::Ai
        } else if label.eq_ignore_ascii_case("analytics") {
            Self::Analytics
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Analytics => "Analytics",
            Self::Other => "Other",
        }
    }
}

/// A normalized directory entry.
///
/// Invariants (enforced by [`crate::parse::normalize`]): `name` and `url`
/// are non-empty, `category` matches `kind` under the closed classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    /// May be empty.
    pub description: String,
    /// Used verbatim as the link target; no well-formedness check beyond presence.
    pub url: String,
    /// The trimmed raw type label, preserved for display even when it is not
    /// one of the recognized categories. `"Other"` when the column was empty.
    pub kind: String,
    pub category: Category,
}
