//! The assessment ledger
//!
//! Owns the flat id -> assessment mapping and assigns ids from a
//! monotonic counter. All grade arithmetic lives in [`crate::stats`];
//! the ledger only holds state and enforces field validation on the
//! way in.

use std::collections::BTreeMap;

use crate::assessment::{Assessment, Draft, Patch};
use crate::error::{GradebookError, Result};

/// In-memory assessment set for one user
#[derive(Debug)]
pub struct Ledger {
    /// Next id to assign; ids start at 1 and are never reused
    next_id: u64,
    assessments: BTreeMap<u64, Assessment>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            next_id: 1,
            assessments: BTreeMap::new(),
        }
    }

    /// Rebuild a ledger from persisted parts.
    ///
    /// Repairs a lagging id counter so ids stay unique even if the
    /// stored counter is stale.
    pub fn from_parts(next_id: u64, rows: Vec<Assessment>) -> Result<Self> {
        let mut assessments = BTreeMap::new();
        let mut max_id = 0;
        for row in rows {
            let id = row.id;
            max_id = max_id.max(id);
            if assessments.insert(id, row).is_some() {
                return Err(GradebookError::invalid_store(format!(
                    "duplicate assessment id {id}"
                )));
            }
        }
        Ok(Ledger {
            next_id: next_id.max(max_id + 1).max(1),
            assessments,
        })
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    /// Iterate assessments in id order
    pub fn assessments(&self) -> impl Iterator<Item = &Assessment> {
        self.assessments.values()
    }

    /// Assessments in display order: due date, then id
    pub fn list(&self) -> Vec<&Assessment> {
        let mut rows: Vec<&Assessment> = self.assessments.values().collect();
        rows.sort_by_key(|a| (a.due_date, a.id));
        rows
    }

    /// Add a new assessment, assigning it a fresh id
    pub fn add(&mut self, draft: Draft) -> Result<&Assessment> {
        draft.validate()?;

        let id = self.next_id;
        self.next_id += 1;

        let assessment = Assessment {
            id,
            title: draft.title,
            weight_pct: draft.weight_pct,
            due_date: draft.due_date,
            score_pct: draft.score_pct,
        };
        tracing::debug!(id, "add_assessment");

        Ok(self.assessments.entry(id).or_insert(assessment))
    }

    pub fn get(&self, id: u64) -> Result<&Assessment> {
        self.assessments
            .get(&id)
            .ok_or(GradebookError::AssessmentNotFound { id })
    }

    /// Replace the named fields of the assessment with `id`
    pub fn update(&mut self, id: u64, patch: Patch) -> Result<&Assessment> {
        patch.validate()?;

        let assessment = self
            .assessments
            .get_mut(&id)
            .ok_or(GradebookError::AssessmentNotFound { id })?;
        patch.apply(assessment);
        tracing::debug!(id, "update_assessment");

        Ok(assessment)
    }

    /// Remove an assessment. Unknown ids are a no-op, never an error,
    /// so retried deletes stay idempotent.
    pub fn remove(&mut self, id: u64) -> bool {
        let removed = self.assessments.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "remove_assessment");
        }
        removed
    }
}
