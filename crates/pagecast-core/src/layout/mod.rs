//! Geometric layout reconstruction.
//!
//! A page's fragments are sorted once ([`sort::sort_fragments`]) and then
//! scanned linearly by [`cluster::cluster`], which groups fragments sharing
//! an approximate baseline into units. Two unit builders exist: lines with
//! inferred spacing ([`lines`]) and rows of discrete cells ([`rows`]).

pub mod cluster;
pub mod lines;
pub mod rows;
pub mod sort;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Thresholds for line detection and gap inference, in page units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Maximum vertical distance for two fragments to share a line or row.
    pub line_tolerance: f64,
    /// Horizontal gaps above this (and up to `tab_gap`) become a space.
    pub space_gap: f64,
    /// Horizontal gaps above this become a tab.
    pub tab_gap: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_tolerance: 5.0,
            space_gap: 5.0,
            tab_gap: 20.0,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<(), ConvertError> {
        for (name, value) in [
            ("line_tolerance", self.line_tolerance),
            ("space_gap", self.space_gap),
            ("tab_gap", self.tab_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConvertError::ConfigInvalid(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }

        if self.space_gap > self.tab_gap {
            return Err(ConvertError::ConfigInvalid(format!(
                "space_gap ({}) must not exceed tab_gap ({})",
                self.space_gap, self.tab_gap
            )));
        }

        Ok(())
    }

    /// Whether moving from `last_y` to `y` starts a new line.
    pub fn breaks_line(&self, y: f64, last_y: f64) -> bool {
        (y - last_y).abs() > self.line_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LayoutOptions::default().validate().is_ok());
    }

    #[test]
    fn test_space_gap_above_tab_gap_rejected() {
        let opts = LayoutOptions {
            space_gap: 30.0,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let opts = LayoutOptions {
            line_tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        let opts = LayoutOptions::default();
        assert!(!opts.breaks_line(95.0, 100.0));
        assert!(opts.breaks_line(94.9, 100.0));
    }
}
