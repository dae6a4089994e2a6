//! Mission requirements and their validation formulas

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Mission requirement
///
/// Only requirements carrying a [`ValidationFormula`] can be checked
/// automatically against a design solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    /// Requirement identifier (e.g. `REQ-001`)
    pub id: String,
    /// Short title
    #[serde(default)]
    pub title: String,
    /// Requirement category
    #[serde(rename = "type", default)]
    pub requirement_type: RequirementType,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Priority level
    #[serde(default)]
    pub priority: Priority,
    /// Machine-checkable formula, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_formula: Option<ValidationFormula>,
}

impl Requirement {
    /// Create requirement without a formula
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            requirement_type: RequirementType::default(),
            description: String::new(),
            priority: Priority::default(),
            validation_formula: None,
        }
    }

    /// With validation formula
    #[inline]
    #[must_use]
    pub fn with_formula(mut self, formula: ValidationFormula) -> Self {
        self.validation_formula = Some(formula);
        self
    }

    /// With requirement type
    #[inline]
    #[must_use]
    pub fn with_type(mut self, requirement_type: RequirementType) -> Self {
        self.requirement_type = requirement_type;
        self
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the requirement carries a validation formula
    #[inline]
    #[must_use]
    pub fn is_validatable(&self) -> bool {
        self.validation_formula.is_some()
    }
}

/// Declarative formula plus the paths that feed its variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFormula {
    /// Boolean expression over the variable names, e.g. `gsd <= 10`
    pub formula: String,
    /// Variable name → extraction path, in declaration order
    #[serde(default)]
    pub variables: IndexMap<String, VariableSpec>,
}

impl ValidationFormula {
    /// Create formula without variables
    #[must_use]
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            variables: IndexMap::new(),
        }
    }

    /// Declare a variable
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, spec: impl Into<VariableSpec>) -> Self {
        self.variables.insert(name.into(), spec.into());
        self
    }
}

/// Where a formula variable comes from
///
/// Accepts either a bare path string or a `{ path, unit }` object on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableSpec {
    /// Path only, no unit
    Path(String),
    /// Path with a display unit
    Detailed {
        /// Path expression into the design solution
        path: String,
        /// Display unit (e.g. `m`, `kg`)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
}

impl VariableSpec {
    /// Path with a display unit
    #[must_use]
    pub fn with_unit(path: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::Detailed {
            path: path.into(),
            unit: Some(unit.into()),
        }
    }

    /// Path expression
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Path(path) | Self::Detailed { path, .. } => path,
        }
    }

    /// Declared unit, empty when none was declared
    #[inline]
    #[must_use]
    pub fn unit(&self) -> &str {
        match self {
            Self::Detailed { unit: Some(unit), .. } => unit,
            _ => "",
        }
    }
}

impl From<&str> for VariableSpec {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for VariableSpec {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// Requirement categories of the SMAD methodology
///
/// Unrecognised categories map to [`RequirementType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequirementType {
    /// Ground sample distance and similar
    SpatialResolution,
    /// Revisit time
    TemporalResolution,
    /// Spectral bands
    SpectralResolution,
    /// Bit depth, sensitivity
    RadiometricResolution,
    /// Swath width
    SwathWidth,
    /// Area coverage
    CoverageArea,
    /// Time from acquisition to delivery
    DataLatency,
    /// Geolocation error
    GeolocationAccuracy,
    /// Signal-to-noise ratio
    SignalToNoiseRatio,
    /// Operational lifetime
    MissionLifetime,
    /// Anything else
    #[default]
    Other,
}

impl RequirementType {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpatialResolution => "spatial_resolution",
            Self::TemporalResolution => "temporal_resolution",
            Self::SpectralResolution => "spectral_resolution",
            Self::RadiometricResolution => "radiometric_resolution",
            Self::SwathWidth => "swath_width",
            Self::CoverageArea => "coverage_area",
            Self::DataLatency => "data_latency",
            Self::GeolocationAccuracy => "geolocation_accuracy",
            Self::SignalToNoiseRatio => "signal_to_noise_ratio",
            Self::MissionLifetime => "mission_lifetime",
            Self::Other => "other",
        }
    }
}

impl From<String> for RequirementType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "spatial_resolution" => Self::SpatialResolution,
            "temporal_resolution" => Self::TemporalResolution,
            "spectral_resolution" => Self::SpectralResolution,
            "radiometric_resolution" => Self::RadiometricResolution,
            "swath_width" => Self::SwathWidth,
            "coverage_area" => Self::CoverageArea,
            "data_latency" => Self::DataLatency,
            "geolocation_accuracy" => Self::GeolocationAccuracy,
            "signal_to_noise_ratio" => Self::SignalToNoiseRatio,
            "mission_lifetime" => Self::MissionLifetime,
            _ => Self::Other,
        }
    }
}

impl From<RequirementType> for String {
    fn from(value: RequirementType) -> Self {
        value.as_str().to_string()
    }
}

impl Display for RequirementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Mission-critical
    Critical,
    /// High
    High,
    /// Medium (default)
    #[default]
    Medium,
    /// Low
    Low,
}
