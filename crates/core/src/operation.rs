// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compound write operations against a single log entry
//!
//! A [`WriteOp`] is an ordered list of steps that a backing store applies
//! all-or-nothing: either every step succeeds and the result is stored, or
//! the entry is left untouched.

use crate::bounds::{CheckpointBounds, ProgressMarker};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step of a compound write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteStep {
    /// Fail unless the entry already exists
    AssertExists,
    /// Insert or replace one daemon's record
    UpsertProgress(ProgressMarker),
    /// Drop one daemon's record
    DeleteProgress { daemon_id: String },
    /// Remove the whole entry
    Remove,
}

/// Errors from applying a write to entry state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("entry does not exist")]
    EntryMissing,
}

/// An atomic compound write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOp {
    steps: Vec<WriteStep>,
}

impl WriteOp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assert_exists(mut self) -> Self {
        self.steps.push(WriteStep::AssertExists);
        self
    }

    pub fn upsert(mut self, progress: ProgressMarker) -> Self {
        self.steps.push(WriteStep::UpsertProgress(progress));
        self
    }

    pub fn delete(mut self, daemon_id: impl Into<String>) -> Self {
        self.steps.push(WriteStep::DeleteProgress {
            daemon_id: daemon_id.into(),
        });
        self
    }

    pub fn remove(mut self) -> Self {
        self.steps.push(WriteStep::Remove);
        self
    }

    pub fn steps(&self) -> &[WriteStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Compute the entry state after this write
    ///
    /// `current` is `None` when the entry does not exist; a returned `None`
    /// means the entry should be removed. Upserting into a missing entry
    /// creates it, while deleting from one leaves it missing.
    pub fn apply(
        &self,
        current: Option<&CheckpointBounds>,
    ) -> Result<Option<CheckpointBounds>, ApplyError> {
        let mut state = current.cloned();

        for step in &self.steps {
            match step {
                WriteStep::AssertExists => {
                    if state.is_none() {
                        return Err(ApplyError::EntryMissing);
                    }
                }
                WriteStep::UpsertProgress(progress) => {
                    state
                        .get_or_insert_with(CheckpointBounds::default)
                        .upsert(progress.clone());
                }
                WriteStep::DeleteProgress { daemon_id } => {
                    if let Some(bounds) = state.as_mut() {
                        bounds.remove(daemon_id);
                    }
                }
                WriteStep::Remove => state = None,
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
