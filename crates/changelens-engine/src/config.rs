//! Run configuration
//!
//! Everything the diff run treats as policy rather than logic: which
//! categories to collect, matching tolerance, parameter comparison mode,
//! real-number equality policy, and the status colors. Nothing here is
//! hardcoded into the classifier.

use std::collections::BTreeSet;

use changelens_core::compare::{ParamCompareMode, RealEqualityPolicy, DEFAULT_LOCATION_TOLERANCE};
use changelens_core::diff::DiffOptions;
use changelens_core::errors::{ChangeLensError, Result};
use serde::{Deserialize, Serialize};

/// Default target category labels: the MEP curve categories
pub const DEFAULT_TARGET_CATEGORIES: &[&str] = &["Pipes", "Ducts", "Cable Trays"];

/// RGB color applied as a visual override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from components
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Configuration for one diff run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Categories collected from both snapshots
    pub target_categories: BTreeSet<String>,
    /// Position tolerance in model units
    pub location_tolerance: f64,
    /// Parameter scan mode
    pub param_mode: ParamCompareMode,
    /// Real-number equality policy
    pub real_policy: RealEqualityPolicy,
    /// Override color for Added elements
    pub added_color: Color,
    /// Override color for Modified elements
    pub modified_color: Color,
    /// Override color for ParamModified elements
    pub param_modified_color: Color,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_categories: DEFAULT_TARGET_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            location_tolerance: DEFAULT_LOCATION_TOLERANCE,
            param_mode: ParamCompareMode::default(),
            real_policy: RealEqualityPolicy::default(),
            added_color: Color::new(255, 0, 0),
            modified_color: Color::new(0, 0, 255),
            param_modified_color: Color::new(255, 165, 0),
        }
    }
}

impl RunConfig {
    /// Validate the configuration before a run starts
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the tolerance is not a positive finite
    /// number or the category set is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.location_tolerance.is_finite() || self.location_tolerance <= 0.0 {
            return Err(ChangeLensError::InvalidConfig {
                reason: format!(
                    "location tolerance must be positive and finite, got {}",
                    self.location_tolerance
                ),
            });
        }
        if self.target_categories.is_empty() {
            return Err(ChangeLensError::InvalidConfig {
                reason: "target category set is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Classifier options derived from this configuration
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            location_tolerance: self.location_tolerance,
            param_mode: self.param_mode,
            real_policy: self.real_policy,
        }
    }
}
