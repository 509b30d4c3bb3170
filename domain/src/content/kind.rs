//! Collection and taxonomy identifiers

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A content collection exposed by the WordPress proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Services,
    Cases,
    Solutions,
    Tools,
    Testimonials,
    Team,
    Posts,
}

impl ContentKind {
    pub const ALL: [ContentKind; 7] = [
        Self::Services,
        Self::Cases,
        Self::Solutions,
        Self::Tools,
        Self::Testimonials,
        Self::Team,
        Self::Posts,
    ];

    /// Collection segment in `/api/wordpress/{collection}`
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Cases => "cases",
            Self::Solutions => "solutions",
            Self::Tools => "tools",
            Self::Testimonials => "testimonials",
            Self::Team => "team",
            Self::Posts => "posts",
        }
    }

    /// Whether single records of this kind are addressed by slug
    pub fn has_detail_pages(&self) -> bool {
        !matches!(self, Self::Testimonials | Self::Team)
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "services" | "service" => Ok(Self::Services),
            "cases" | "case" | "case-studies" | "case_studies" => Ok(Self::Cases),
            "solutions" | "solution" => Ok(Self::Solutions),
            "tools" | "tool" => Ok(Self::Tools),
            "testimonials" | "testimonial" => Ok(Self::Testimonials),
            "team" | "team-members" | "team_members" => Ok(Self::Team),
            "posts" | "post" | "blog" => Ok(Self::Posts),
            other => Err(DomainError::UnknownContentKind(other.to_string())),
        }
    }
}

/// A WordPress taxonomy used to classify content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    ServiceCategory,
    CaseCategory,
    SolutionCategory,
    ToolCategory,
    ToolType,
    TargetAudience,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 6] = [
        Self::ServiceCategory,
        Self::CaseCategory,
        Self::SolutionCategory,
        Self::ToolCategory,
        Self::ToolType,
        Self::TargetAudience,
    ];

    /// Taxonomy slug as registered in WordPress
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceCategory => "service_category",
            Self::CaseCategory => "case_category",
            Self::SolutionCategory => "solution_category",
            Self::ToolCategory => "tool_category",
            Self::ToolType => "tool_type",
            Self::TargetAudience => "target_audience",
        }
    }

    /// Label shown when a term name cannot be resolved
    pub fn fallback_label(&self, id: u64) -> String {
        match self {
            Self::TargetAudience => format!("Audience #{}", id),
            _ => format!("Category #{}", id),
        }
    }
}

impl std::fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Taxonomy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownTaxonomy(s.to_string()))
    }
}
