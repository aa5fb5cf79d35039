use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// A product feature a shopper can ask for
///
/// The vocabulary is closed: the same identifiers tag catalog products and
/// validate the features selected on the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Battery,
    Screen,
    Storage,
    Camera,
    Performance,
}

impl Feature {
    /// Every feature, in the order the form lists them
    pub const ALL: [Feature; 5] = [
        Feature::Battery,
        Feature::Screen,
        Feature::Storage,
        Feature::Camera,
        Feature::Performance,
    ];

    /// Wire identifier (e.g. "battery")
    pub fn id(&self) -> &'static str {
        match self {
            Feature::Battery => "battery",
            Feature::Screen => "screen",
            Feature::Storage => "storage",
            Feature::Camera => "camera",
            Feature::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Battery => "Battery Life",
            Feature::Screen => "Screen Quality",
            Feature::Storage => "Storage",
            Feature::Camera => "Camera",
            Feature::Performance => "Performance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Feature::Battery => "Longer battery life for extended use",
            Feature::Screen => "High-resolution display for crisp visuals",
            Feature::Storage => "Ample space for all your files and apps",
            Feature::Camera => "Advanced camera system for stunning photos",
            Feature::Performance => "Powerful processor for smooth operation",
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error returned when an identifier is not part of the feature vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature: {0}")]
pub struct UnknownFeatureId(pub String);

impl FromStr for Feature {
    type Err = UnknownFeatureId;

    /// Exact, case-sensitive match against the wire identifiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.id() == s)
            .ok_or_else(|| UnknownFeatureId(s.to_string()))
    }
}

/// Feature entry as served to the search form
#[derive(Debug, Clone, Serialize)]
pub struct FeatureInfo {
    pub id: Feature,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<Feature> for FeatureInfo {
    fn from(feature: Feature) -> Self {
        Self {
            id: feature,
            label: feature.label(),
            description: feature.description(),
        }
    }
}
