//! Weighted-grade arithmetic
//!
//! Pure functions over the current assessment set. `current_weighted`
//! is the raw weighted-points sum (weight * score / 100 over graded
//! rows), not a percentage of graded weight; `remaining_weight` is the
//! total weight of not-yet-graded rows. Reported values are rounded to
//! two decimals.

use serde::Serialize;

use crate::assessment::Assessment;
use crate::error::{GradebookError, Result};

/// Snapshot of where the grade stands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentStats {
    /// Sum of weight * score / 100 over graded assessments
    pub current_weighted: f64,
    /// Total weight of graded assessments
    pub weight_done: f64,
    /// Total weight of not-yet-graded assessments
    pub remaining_weight: f64,
}

/// Projected average needed on remaining work to reach a target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatIf {
    pub target: f64,
    /// None when nothing remains to be graded
    pub required_avg: Option<f64>,
    pub attainable: bool,
}

/// Result of checking the weight-sum invariant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightCheck {
    pub total_weight: f64,
    /// true iff the total weight does not exceed 100%
    pub ok: bool,
    pub message: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the current weighted sum and how much weight is done/left
pub fn current_stats<'a>(rows: impl IntoIterator<Item = &'a Assessment>) -> CurrentStats {
    let mut completed = 0.0;
    let mut weight_done = 0.0;
    let mut remaining = 0.0;

    for row in rows {
        match row.score_pct {
            Some(score) => {
                completed += row.weight_pct * score;
                weight_done += row.weight_pct;
            }
            None => remaining += row.weight_pct,
        }
    }

    CurrentStats {
        current_weighted: round2(completed / 100.0),
        weight_done: round2(weight_done),
        remaining_weight: round2(remaining),
    }
}

/// Check that weights sum to at most 100%.
///
/// Violations are reported, never clamped: the check is informational
/// and does not block mutations.
pub fn validate_weights<'a>(rows: impl IntoIterator<Item = &'a Assessment>) -> WeightCheck {
    let total = round2(rows.into_iter().map(|r| r.weight_pct).sum());
    let is_exact = (total - 100.0).abs() < 1e-6;

    let message = if is_exact {
        "Weights sum to 100%.".to_string()
    } else if total < 100.0 {
        format!(
            "Weights sum to {total}%. You can still add {}%.",
            round2(100.0 - total)
        )
    } else {
        format!("Weights exceed 100% (total {total}%). Consider reducing some weights.")
    };

    WeightCheck {
        total_weight: total,
        ok: is_exact || total < 100.0,
        message,
    }
}

/// Required average on remaining work to reach `target` overall.
///
/// With nothing remaining there is no average to require; attainability
/// is then just whether the current weighted sum already meets the
/// target. A negative required average (target already exceeded) is
/// reported as-is and counts as attainable; anything above 100 does not.
pub fn what_if<'a>(
    rows: impl IntoIterator<Item = &'a Assessment>,
    target: f64,
) -> Result<WhatIf> {
    if !target.is_finite() {
        return Err(GradebookError::validation("target", "must be a finite number"));
    }

    let stats = current_stats(rows);
    if stats.remaining_weight == 0.0 {
        return Ok(WhatIf {
            target,
            required_avg: None,
            attainable: stats.current_weighted >= target,
        });
    }

    let required = round2((target - stats.current_weighted) * 100.0 / stats.remaining_weight);
    Ok(WhatIf {
        target,
        required_avg: Some(required),
        attainable: required <= 100.0,
    })
}
