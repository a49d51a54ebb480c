// Distribution normalizer - Category shares to colored pie slices
use crate::domain::chart::DistributionSlice;
use crate::domain::error::DashboardError;
use crate::domain::weather::{normalize_keyword, DistributionInput};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TOLERANCE: f64 = 0.5;

const TOTAL: f64 = 100.0;
// Below this the sum is treated as exactly 100
const EXACT_EPSILON: f64 = 1e-9;

/// Fixed category colors plus the overflow palette for everything else.
#[derive(Debug, Clone)]
pub struct CategoryPalette {
    known: HashMap<String, String>,
    overflow: Vec<String>,
}

impl CategoryPalette {
    pub fn new() -> Self {
        let known = [
            ("sunny", "#FFD700"),
            ("cloudy", "#87CEEB"),
            ("rainy", "#4682B4"),
            ("stormy", "#2F4F4F"),
            ("snowy", "#E0E7EF"),
            ("partly-cloudy", "#B0C4DE"),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color.to_string()))
        .collect();

        let overflow = ["#F97316", "#A855F7", "#EC4899", "#14B8A6", "#84CC16", "#64748B"]
            .into_iter()
            .map(str::to_string)
            .collect();

        Self { known, overflow }
    }

    pub fn known_color(&self, category: &str) -> Option<&str> {
        self.known.get(&normalize_keyword(category)).map(String::as_str)
    }

    pub fn overflow_color(&self, index: usize) -> &str {
        &self.overflow[index % self.overflow.len()]
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct DistributionNormalizer {
    palette: CategoryPalette,
    tolerance: f64,
}

impl DistributionNormalizer {
    pub fn new(palette: CategoryPalette, tolerance: f64) -> Self {
        Self { palette, tolerance }
    }

    pub fn check_tolerance(&self) -> Result<(), DashboardError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(DashboardError::configuration(format!(
                "distribution tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Validates shares, rescales them to sum to 100 and binds colors.
    ///
    /// Output order is input order.
    pub fn normalize(
        &self,
        slices: &[DistributionInput],
    ) -> Result<Vec<DistributionSlice>, DashboardError> {
        self.check_tolerance()?;

        let mut seen = HashSet::new();
        for slice in slices {
            if !slice.value.is_finite() || slice.value < 0.0 {
                return Err(DashboardError::validation(format!(
                    "share for {} must be a non-negative number, got {}",
                    slice.name, slice.value
                )));
            }
            if !seen.insert(normalize_keyword(&slice.name)) {
                return Err(DashboardError::validation(format!(
                    "duplicate distribution category {}",
                    slice.name
                )));
            }
        }

        if slices.is_empty() {
            return Ok(Vec::new());
        }

        let sum: f64 = slices.iter().map(|s| s.value).sum();
        if !sum.is_finite() {
            return Err(DashboardError::validation(format!(
                "distribution shares overflow when summed ({} categories)",
                slices.len()
            )));
        }
        if sum == 0.0 {
            return Err(DashboardError::validation(
                "distribution shares sum to zero and cannot be normalized",
            ));
        }

        // The tolerance only decides how loudly a rescale is reported
        let deviation = (sum - TOTAL).abs();
        let rescale = deviation > EXACT_EPSILON;
        if rescale && deviation > self.tolerance {
            tracing::warn!(
                "Distribution shares sum to {}, rescaling {} categories to 100",
                sum,
                slices.len()
            );
        } else if rescale {
            tracing::debug!("Distribution shares sum to {}, correcting drift", sum);
        }

        let mut overflow_index = 0;
        let normalized = slices
            .iter()
            .map(|slice| {
                let color = match self.palette.known_color(&slice.name) {
                    Some(color) => color.to_string(),
                    None => match &slice.color {
                        Some(explicit) => explicit.clone(),
                        None => {
                            let color = self.palette.overflow_color(overflow_index).to_string();
                            overflow_index += 1;
                            color
                        }
                    },
                };
                DistributionSlice {
                    name: slice.name.clone(),
                    share: if rescale {
                        slice.value / sum * TOTAL
                    } else {
                        slice.value
                    },
                    color,
                }
            })
            .collect();

        Ok(normalized)
    }
}

impl Default for DistributionNormalizer {
    fn default() -> Self {
        Self::new(CategoryPalette::new(), DEFAULT_TOLERANCE)
    }
}
