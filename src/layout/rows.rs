// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::model::{Phase, PhaseId};

/// Rows assigned to a project's phases, rebuilt on every input change.
///
/// Both the timeline canvas and the mirrored project list consume the same
/// assignment; computing it in one place is what keeps the two panes aligned
/// pixel-for-pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAssignment {
    rows: BTreeMap<PhaseId, usize>,
    total_rows: usize,
}

impl RowAssignment {
    pub fn rows(&self) -> &BTreeMap<PhaseId, usize> {
        &self.rows
    }

    pub fn row_of(&self, phase_id: &PhaseId) -> Option<usize> {
        self.rows.get(phase_id).copied()
    }

    /// Always at least 1: a project with no phases still reserves one row so
    /// its list entry has a height.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }
}

/// Greedy interval partitioning: each phase takes the lowest-indexed row
/// whose previous occupant has already ended.
///
/// - Phases are visited in start-date order; the sort is stable, so equal
///   start dates keep their input order.
/// - A row is free when its end date is on/before the candidate's start:
///   touching endpoints do not overlap.
/// - An inverted range occupies its row as a zero-width interval at the
///   start date.
///
/// The row count this produces equals the maximum number of phases that
/// overlap at any single instant (interval graphs are perfect), so the
/// layout is as short as it can be.
pub fn assign_rows(phases: &[Phase]) -> RowAssignment {
    let mut ordered: Vec<&Phase> = phases.iter().collect();
    ordered.sort_by_key(|phase| phase.start_date());

    let mut row_ends: SmallVec<[NaiveDate; 8]> = SmallVec::new();
    let mut rows = BTreeMap::new();

    for phase in ordered {
        let start = phase.start_date();
        let end = phase.effective_end_date();
        let row = match row_ends.iter().position(|row_end| *row_end <= start) {
            Some(index) => {
                row_ends[index] = end;
                index
            }
            None => {
                row_ends.push(end);
                row_ends.len() - 1
            }
        };
        rows.insert(phase.id().clone(), row);
    }

    RowAssignment { rows, total_rows: row_ends.len().max(1) }
}
