// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::ids::{PhaseId, ProjectId};
use super::phase::Phase;
use super::project::Project;

pub(crate) fn pid(value: &str) -> ProjectId {
    ProjectId::new(value).expect("project id")
}

pub(crate) fn phid(value: &str) -> PhaseId {
    PhaseId::new(value).expect("phase id")
}

pub(crate) fn date(value: &str) -> NaiveDate {
    value.parse().expect("date")
}

pub(crate) fn phase(id: &str, start: &str, end: &str) -> Phase {
    Phase::new(phid(id), id.to_owned(), date(start), date(end), 0)
}

/// Classic two-row project: P2 overlaps P1, P3 starts after P1 ends.
pub(crate) fn staggered_project() -> Project {
    Project::new(
        pid("prj-staggered"),
        "Staggered",
        vec![
            phase("P1", "2026-01-01", "2026-01-10"),
            phase("P2", "2026-01-05", "2026-01-15"),
            phase("P3", "2026-01-11", "2026-01-20"),
        ],
    )
}

/// Three phases spanning the same range; every phase needs its own row.
pub(crate) fn fully_overlapping_project() -> Project {
    Project::new(
        pid("prj-stacked"),
        "Stacked",
        vec![
            phase("A", "2026-01-01", "2026-01-31"),
            phase("B", "2026-01-01", "2026-01-31"),
            phase("C", "2026-01-01", "2026-01-31"),
        ],
    )
}
