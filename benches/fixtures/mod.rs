// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic synthetic portfolios for the layout benches.

use chrono::{Days, NaiveDate};

use phaseline::model::{decode_portfolio, PhaseRecord, Project, ProjectRecord};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    Large,
}

pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date")
}

/// Builds a portfolio with the given shape. Phase `k` of each project starts
/// `k * stagger_days` after the anchor and runs for `duration_days`, so small
/// staggers force dense row stacking while large ones keep rows shallow.
pub fn portfolio(
    projects: usize,
    phases_per_project: usize,
    stagger_days: u64,
    duration_days: u64,
) -> Vec<Project> {
    let anchor = anchor();
    let records: Vec<ProjectRecord> = (0..projects)
        .map(|p| ProjectRecord {
            id: format!("prj-{p:04}"),
            name: format!("Project {p:04}"),
            phases: (0..phases_per_project)
                .map(|k| {
                    let start = anchor + Days::new(k as u64 * stagger_days);
                    let end = start + Days::new(duration_days);
                    PhaseRecord {
                        id: format!("ph-{p:04}-{k:03}"),
                        name: format!("Phase {k:03}"),
                        start_date: start.to_string(),
                        end_date: end.to_string(),
                        progress: ((p + k) % 101) as u8,
                    }
                })
                .collect(),
        })
        .collect();
    decode_portfolio(&records)
}

pub fn fixture(case: Case) -> Vec<Project> {
    match case {
        Case::Small => portfolio(5, 4, 10, 14),
        Case::MediumDense => portfolio(25, 12, 2, 21),
        Case::Large => portfolio(100, 20, 5, 14),
    }
}

pub fn phase_count(projects: &[Project]) -> u64 {
    projects.iter().map(|project| project.phases().len() as u64).sum()
}
