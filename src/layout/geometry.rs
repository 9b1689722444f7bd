// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::config::{Px, TimelineConfig};
use crate::model::{PhaseId, Project, ProjectId};

use super::axis::{DateAxis, TimelineHeader};
use super::rows::{assign_rows, RowAssignment};

/// Draw rectangle for one phase bar, in timeline-canvas coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRect {
    phase_id: PhaseId,
    row: usize,
    left_px: Px,
    width_px: Px,
    top_px: Px,
    height_px: Px,
}

impl PhaseRect {
    pub fn phase_id(&self) -> &PhaseId {
        &self.phase_id
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn left_px(&self) -> Px {
        self.left_px
    }

    pub fn width_px(&self) -> Px {
        self.width_px
    }

    pub fn top_px(&self) -> Px {
        self.top_px
    }

    pub fn height_px(&self) -> Px {
        self.height_px
    }
}

/// Rendering hint: a horizontal connector between two same-row phases with a
/// real gap between them. Carries no correctness weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    from_phase_id: PhaseId,
    to_phase_id: PhaseId,
    row: usize,
    from_x_px: Px,
    to_x_px: Px,
}

impl Connector {
    pub fn from_phase_id(&self) -> &PhaseId {
        &self.from_phase_id
    }

    pub fn to_phase_id(&self) -> &PhaseId {
        &self.to_phase_id
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn from_x_px(&self) -> Px {
        self.from_x_px
    }

    pub fn to_x_px(&self) -> Px {
        self.to_x_px
    }
}

/// Renderable geometry for one project.
///
/// `row_height_px` is the single height value both the timeline canvas and
/// the mirrored project list consume; neither pane recomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGeometry {
    project_id: ProjectId,
    assignment: RowAssignment,
    row_height_px: Px,
    phases: Vec<PhaseRect>,
    connectors: Vec<Connector>,
}

impl ProjectGeometry {
    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn assignment(&self) -> &RowAssignment {
        &self.assignment
    }

    pub fn total_rows(&self) -> usize {
        self.assignment.total_rows()
    }

    pub fn row_height_px(&self) -> Px {
        self.row_height_px
    }

    /// Phase rectangles in the project's input phase order.
    pub fn phases(&self) -> &[PhaseRect] {
        &self.phases
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }
}

/// Full portfolio geometry handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioGeometry {
    header: TimelineHeader,
    today_x_px: Px,
    projects: Vec<ProjectGeometry>,
}

impl PortfolioGeometry {
    pub fn header(&self) -> &TimelineHeader {
        &self.header
    }

    pub fn today_x_px(&self) -> Px {
        self.today_x_px
    }

    /// Project geometries in portfolio input order.
    pub fn projects(&self) -> &[ProjectGeometry] {
        &self.projects
    }

    /// Summed list/canvas height of all projects.
    pub fn total_height_px(&self) -> Px {
        self.projects.iter().map(|project| project.row_height_px()).sum()
    }
}

fn row_top_px(config: &TimelineConfig, row: usize) -> Px {
    config.base_top_offset_px()
        + row as Px * (config.bar_height_px() + config.row_gap_px())
        + config.row_gap_px()
}

/// Builds rectangles and connector hints for one project.
pub fn build_project_geometry(project: &Project, config: &TimelineConfig) -> ProjectGeometry {
    let axis = DateAxis::new(config);
    let assignment = assign_rows(project.phases());

    let phases = project
        .phases()
        .iter()
        .map(|phase| {
            let row = assignment.row_of(phase.id()).expect("every decoded phase has a row");
            let left_px = axis.date_to_x(phase.start_date());
            let right_px = axis.date_to_x(phase.end_date());
            PhaseRect {
                phase_id: phase.id().clone(),
                row,
                left_px,
                width_px: (right_px - left_px).max(config.min_bar_width_px()),
                top_px: row_top_px(config, row),
                height_px: config.bar_height_px(),
            }
        })
        .collect();

    let connectors = build_connectors(project, &assignment, &axis);

    let row_height_px = config.base_top_offset_px()
        + assignment.total_rows() as Px * (config.bar_height_px() + config.row_gap_px())
        + config.row_gap_px();

    ProjectGeometry {
        project_id: project.id().clone(),
        assignment,
        row_height_px,
        phases,
        connectors,
    }
}

fn build_connectors(
    project: &Project,
    assignment: &RowAssignment,
    axis: &DateAxis,
) -> Vec<Connector> {
    let mut per_row: Vec<Vec<&crate::model::Phase>> = vec![Vec::new(); assignment.total_rows()];
    for phase in project.phases() {
        if let Some(row) = assignment.row_of(phase.id()) {
            per_row[row].push(phase);
        }
    }

    let mut connectors = Vec::new();
    for (row, mut phases) in per_row.into_iter().enumerate() {
        phases.sort_by_key(|phase| phase.start_date());
        for pair in phases.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            // Touching or clamped-overlapping bars get no connector.
            if earlier.effective_end_date() < later.start_date() {
                connectors.push(Connector {
                    from_phase_id: earlier.id().clone(),
                    to_phase_id: later.id().clone(),
                    row,
                    from_x_px: axis.date_to_x(earlier.effective_end_date()),
                    to_x_px: axis.date_to_x(later.start_date()),
                });
            }
        }
    }
    connectors
}

/// Lays out the whole portfolio.
///
/// Projects are independent, so the per-project work fans out across the
/// rayon pool; collection preserves input order, keeping the output identical
/// to the serial computation.
pub fn layout_portfolio(
    projects: &[Project],
    config: &TimelineConfig,
    today: NaiveDate,
) -> PortfolioGeometry {
    let axis = DateAxis::new(config);
    let project_geometries = projects
        .par_iter()
        .map(|project| build_project_geometry(project, config))
        .collect();

    PortfolioGeometry {
        header: axis.build_header(),
        today_x_px: axis.date_to_x(today),
        projects: project_geometries,
    }
}
