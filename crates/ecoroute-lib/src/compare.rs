//! Comparison of scored candidate routes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::estimate::RouteEstimate;

/// What the caller wants the preferred route to optimise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationGoal {
    /// Prefer the shortest candidate.
    Time,
    /// Prefer the lowest-emission candidate.
    #[default]
    Co2,
}

impl OptimizationGoal {
    /// `"time"` selects [`OptimizationGoal::Time`]; anything else is CO₂.
    pub fn from_str_lossy(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("time") {
            OptimizationGoal::Time
        } else {
            OptimizationGoal::Co2
        }
    }
}

impl<'de> Deserialize<'de> for OptimizationGoal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&value))
    }
}

impl fmt::Display for OptimizationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationGoal::Time => f.write_str("time"),
            OptimizationGoal::Co2 => f.write_str("co2"),
        }
    }
}

/// Outcome of comparing a set of candidates. Indices refer to the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteComparison {
    /// Candidate with the smallest distance.
    pub shortest: usize,
    /// Candidate with the smallest CO₂.
    pub eco: usize,
    /// `shortest` for [`OptimizationGoal::Time`], otherwise `eco`.
    pub preferred: usize,
    /// CO₂ saved by the eco candidate relative to the shortest one, in percent.
    pub co2_saved_percent: u32,
}

/// Pick the shortest and eco candidates and compute the CO₂ saving.
///
/// Ties resolve to the earliest candidate. An empty slice yields
/// [`Error::NoRoutes`].
pub fn compare_estimates(
    estimates: &[RouteEstimate],
    goal: OptimizationGoal,
) -> Result<RouteComparison> {
    let shortest = first_minimum(estimates, |e| e.distance_km).ok_or(Error::NoRoutes)?;
    let eco = first_minimum(estimates, |e| e.co2_kg).ok_or(Error::NoRoutes)?;

    let preferred = match goal {
        OptimizationGoal::Time => shortest,
        OptimizationGoal::Co2 => eco,
    };

    Ok(RouteComparison {
        shortest,
        eco,
        preferred,
        co2_saved_percent: co2_saved_percent(&estimates[shortest], &estimates[eco]),
    })
}

/// `max(0, (shortest - eco) / shortest * 100)`, rounded. A zero-emission
/// shortest route divides by one instead.
pub fn co2_saved_percent(shortest: &RouteEstimate, eco: &RouteEstimate) -> u32 {
    let denominator = if shortest.co2_kg == 0.0 {
        1.0
    } else {
        shortest.co2_kg
    };
    let saved = ((shortest.co2_kg - eco.co2_kg) / denominator * 100.0).max(0.0);
    saved.round() as u32
}

fn first_minimum<F>(estimates: &[RouteEstimate], key: F) -> Option<usize>
where
    F: Fn(&RouteEstimate) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, estimate) in estimates.iter().enumerate() {
        let value = key(estimate);
        match best {
            Some((_, current)) if value >= current || value.is_nan() => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}
