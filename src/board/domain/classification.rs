//! Priority and category labels attached to every task.

use super::{ParseCategoryError, ParsePriorityError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Drop everything.
    Critical,
    /// Next up.
    High,
    /// Normal scheduling.
    Medium,
    /// When time allows.
    Low,
}

impl Priority {
    /// All priorities from most to least urgent.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Returns the display label, which is also the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePriorityError(value.to_owned()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of security-operations work a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Penetration testing engagement.
    #[serde(rename = "Pen Testing")]
    PenTesting,
    /// Client-facing deliverable.
    #[serde(rename = "Client Work")]
    ClientWork,
    /// Compliance or audit item.
    #[serde(rename = "Compliance")]
    Compliance,
    /// Internal housekeeping.
    #[serde(rename = "Internal")]
    Internal,
    /// Active incident handling.
    #[serde(rename = "Incident Response")]
    IncidentResponse,
    /// Vulnerability scanning and triage.
    #[serde(rename = "Vulnerability Assessment")]
    VulnerabilityAssessment,
    /// Anything else.
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Self; 7] = [
        Self::PenTesting,
        Self::ClientWork,
        Self::Compliance,
        Self::Internal,
        Self::IncidentResponse,
        Self::VulnerabilityAssessment,
        Self::Other,
    ];

    /// Returns the display label, which is also the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PenTesting => "Pen Testing",
            Self::ClientWork => "Client Work",
            Self::Compliance => "Compliance",
            Self::Internal => "Internal",
            Self::IncidentResponse => "Incident Response",
            Self::VulnerabilityAssessment => "Vulnerability Assessment",
            Self::Other => "Other",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError(value.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
