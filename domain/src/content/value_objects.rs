//! Content value objects: nested, immutable parts of the content entities

use serde::{Deserialize, Serialize};

/// One step of a service delivery process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

impl ProcessStep {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A question/answer pair shown on service pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A highlighted tool feature with its display icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFeature {
    /// Icon class (Font Awesome identifier)
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl ToolFeature {
    /// Icon used when a feature line does not name one
    pub const DEFAULT_ICON: &'static str = "fas fa-check";

    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon: Self::DEFAULT_ICON.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Price band of a solution package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingRange {
    Budget,
    #[default]
    Standard,
    Premium,
}

impl PricingRange {
    /// Lenient parse; unknown values fall back to [`PricingRange::Standard`].
    pub fn from_field(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "budget" | "low" | "$" => Self::Budget,
            "premium" | "high" | "$$$" => Self::Premium,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

impl std::fmt::Display for PricingRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Billing model of a tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    #[default]
    Monthly,
    OneTime,
    Freemium,
}

impl PricingModel {
    /// Lenient parse; unknown values fall back to [`PricingModel::Monthly`].
    pub fn from_field(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "onetime" => Self::OneTime,
            "freemium" | "free" => Self::Freemium,
            _ => Self::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::OneTime => "one_time",
            Self::Freemium => "freemium",
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A taxonomy term (category, industry, audience, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// Number of published records tagged with this term
    pub count: u64,
}
