//! Native Rust JSON/TOML format for discretization configuration
//!
//! ## Example JSON Configuration
//!
//! ```json
//! {
//!     "refinement_level": 3,
//!     "polynomial_degree": 1,
//!     "quadrature": {
//!         "maximum_quadrature_degree": 50,
//!         "point_tolerance": 1e-9,
//!         "check_orientation": true
//!     }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::constants::{MAXIMUM_QUADRATURE_DEGREE, PT_COMP_TOLERANCE};
pub use crate::core::error::ConfigError;

/// Quadrature and topology tolerances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Highest degree of the precomputed Gauss table
    pub maximum_quadrature_degree: usize,

    /// Distance below which two patch corners are the same vertex
    pub point_tolerance: f64,

    /// Verify that patches meet edge to edge with opposite orientation
    pub check_orientation: bool,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            maximum_quadrature_degree: MAXIMUM_QUADRATURE_DEGREE,
            point_tolerance: PT_COMP_TOLERANCE,
            check_orientation: true,
        }
    }
}

impl QuadratureConfig {
    /// Set the maximum quadrature degree
    pub fn with_maximum_degree(mut self, degree: usize) -> Self {
        self.maximum_quadrature_degree = degree;
        self
    }

    /// Set the vertex coincidence tolerance
    pub fn with_point_tolerance(mut self, tolerance: f64) -> Self {
        self.point_tolerance = tolerance;
        self
    }

    /// Enable or disable the patch orientation check
    pub fn with_orientation_check(mut self, check: bool) -> Self {
        self.check_orientation = check;
        self
    }

    /// Reject values the quadrature cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maximum_quadrature_degree == 0 {
            return Err(ConfigError::Invalid(
                "maximum_quadrature_degree must be positive".to_string(),
            ));
        }
        if !(self.point_tolerance.is_finite() && self.point_tolerance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "point_tolerance must be positive, got {}",
                self.point_tolerance
            )));
        }
        Ok(())
    }
}

/// Refinement, ansatz degree and quadrature settings of one discretization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizationConfig {
    /// Uniform refinement level of every patch
    pub refinement_level: usize,

    /// Polynomial degree of the ansatz functions on each element
    #[serde(default)]
    pub polynomial_degree: usize,

    /// Quadrature settings
    #[serde(default)]
    pub quadrature: QuadratureConfig,
}

impl DiscretizationConfig {
    /// Create a configuration with default quadrature settings
    pub fn new(refinement_level: usize, polynomial_degree: usize) -> Self {
        Self {
            refinement_level,
            polynomial_degree,
            quadrature: QuadratureConfig::default(),
        }
    }

    /// Replace the quadrature settings
    pub fn with_quadrature(mut self, quadrature: QuadratureConfig) -> Self {
        self.quadrature = quadrature;
        self
    }

    /// Reject values the discretization cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 4^level elements per patch; beyond 15 the arena no longer fits in memory
        if self.refinement_level > 15 {
            return Err(ConfigError::Invalid(format!(
                "refinement_level {} is too deep",
                self.refinement_level
            )));
        }
        self.quadrature.validate()
    }
}

/// Configuration file format
#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Load a discretization configuration from a file
///
/// Format is auto-detected from file extension (.json or .toml)
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DiscretizationConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

    parse_config(&content, format)
}

/// Parse and validate a discretization configuration from a string
pub fn parse_config(
    content: &str,
    format: ConfigFormat,
) -> Result<DiscretizationConfig, ConfigError> {
    let config: DiscretizationConfig = match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
    };
    config.validate()?;
    Ok(config)
}

/// Save a discretization configuration to a file
pub fn save_config<P: AsRef<Path>>(
    config: &DiscretizationConfig,
    path: P,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

    let content = serialize_config(config, format)?;
    fs::write(path, content)?;
    Ok(())
}

/// Serialize a discretization configuration to a string
pub fn serialize_config(
    config: &DiscretizationConfig,
    format: ConfigFormat,
) -> Result<String, ConfigError> {
    match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string())),
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "refinement_level": 3,
        "polynomial_degree": 2,
        "quadrature": {
            "maximum_quadrature_degree": 40,
            "point_tolerance": 1e-10
        }
    }"#;

    const SAMPLE_TOML: &str = r#"
refinement_level = 2

[quadrature]
check_orientation = false
"#;

    #[test]
    fn test_parse_json() {
        let config = parse_config(SAMPLE_JSON, ConfigFormat::Json).unwrap();

        assert_eq!(config.refinement_level, 3);
        assert_eq!(config.polynomial_degree, 2);
        assert_eq!(config.quadrature.maximum_quadrature_degree, 40);
        assert!((config.quadrature.point_tolerance - 1e-10).abs() < 1e-20);
        assert!(config.quadrature.check_orientation);
    }

    #[test]
    fn test_parse_toml_defaults() {
        let config = parse_config(SAMPLE_TOML, ConfigFormat::Toml).unwrap();

        assert_eq!(config.refinement_level, 2);
        assert_eq!(config.polynomial_degree, 0);
        assert_eq!(
            config.quadrature.maximum_quadrature_degree,
            MAXIMUM_QUADRATURE_DEGREE
        );
        assert!(!config.quadrature.check_orientation);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let json = r#"{ "refinement_level": 1, "quadrature": { "point_tolerance": -1.0 } }"#;
        let err = parse_config(json, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_serialize_toml() {
        let config = DiscretizationConfig::new(4, 1)
            .with_quadrature(QuadratureConfig::default().with_maximum_degree(30));
        let serialized = serialize_config(&config, ConfigFormat::Toml).unwrap();

        let reparsed = parse_config(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_format_detection() {
        assert!(matches!(
            ConfigFormat::from_path("run.JSON"),
            Some(ConfigFormat::Json)
        ));
        assert!(matches!(
            ConfigFormat::from_path("run.toml"),
            Some(ConfigFormat::Toml)
        ));
        assert!(ConfigFormat::from_path("run.yaml").is_none());
    }
}
