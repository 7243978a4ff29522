//! Classifier model versions offered to the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model version sent with each prediction request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVersion {
    #[default]
    V1,
    V2,
}

impl ModelVersion {
    /// Every selectable version, in display order.
    pub const ALL: [ModelVersion; 2] = [ModelVersion::V1, ModelVersion::V2];

    /// Wire value used in the `model` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVersion::V1 => "v1",
            ModelVersion::V2 => "v2",
        }
    }

    /// Label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            ModelVersion::V1 => "Version 1",
            ModelVersion::V2 => "Version 2",
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a selector value is not a known version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown model version: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for ModelVersion {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelVersion::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}
