//! Assessment records and input payloads
//!
//! An assessment is one graded or pending piece of coursework with a
//! weight toward the final grade. Scores and weights are percentages in
//! [0, 100]; a missing score means the work is not yet graded and is
//! serialized as `null`, never omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

/// One graded or pending piece of coursework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique identifier, assigned on creation, immutable
    pub id: u64,
    pub title: String,
    /// Percentage points this assessment contributes to the final grade
    pub weight_pct: f64,
    pub due_date: NaiveDate,
    /// None until graded
    pub score_pct: Option<f64>,
}

impl Assessment {
    /// Whether a score has been recorded
    pub fn is_graded(&self) -> bool {
        self.score_pct.is_some()
    }
}

/// Payload for creating an assessment (no id yet)
#[derive(Debug, Clone)]
pub struct Draft {
    pub title: String,
    pub weight_pct: f64,
    pub due_date: NaiveDate,
    pub score_pct: Option<f64>,
}

impl Draft {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_pct("weight_pct", self.weight_pct)?;
        if let Some(score) = self.score_pct {
            validate_pct("score_pct", score)?;
        }
        Ok(())
    }
}

/// Partial update for an assessment; only provided fields are replaced.
///
/// `score_pct: Some(None)` clears a recorded score back to ungraded.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    pub title: Option<String>,
    pub weight_pct: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub score_pct: Option<Option<f64>>,
}

impl Patch {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(weight) = self.weight_pct {
            validate_pct("weight_pct", weight)?;
        }
        if let Some(Some(score)) = self.score_pct {
            validate_pct("score_pct", score)?;
        }
        Ok(())
    }

    /// Replace the named fields on an existing assessment
    pub fn apply(&self, assessment: &mut Assessment) {
        if let Some(title) = &self.title {
            assessment.title = title.clone();
        }
        if let Some(weight) = self.weight_pct {
            assessment.weight_pct = weight;
        }
        if let Some(due_date) = self.due_date {
            assessment.due_date = due_date;
        }
        if let Some(score) = self.score_pct {
            assessment.score_pct = score;
        }
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(GradebookError::validation("title", "must not be empty"));
    }
    Ok(())
}

fn validate_pct(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GradebookError::validation(field, "must be a finite number"));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(GradebookError::validation(
            field,
            format!("must be between 0 and 100, got {value}"),
        ));
    }
    Ok(())
}

/// Parse an ISO `YYYY-MM-DD` due date
pub fn parse_due_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        GradebookError::validation("due_date", format!("expected YYYY-MM-DD, got {value:?}"))
    })
}
