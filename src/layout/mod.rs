// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Timeline layout engine.
//!
//! Pure, deterministic functions from decoded projects plus a
//! [`crate::config::TimelineConfig`] to renderable geometry: date-to-pixel
//! mapping, greedy interval-partitioned row assignment, and per-phase draw
//! rectangles.

pub mod axis;
pub mod geometry;
pub mod rows;

pub use axis::{DateAxis, MonthBand, TimelineHeader, WeekMark, HEADER_MONTHS, HEADER_WEEKS};
pub use geometry::{
    build_project_geometry, layout_portfolio, Connector, PhaseRect, PortfolioGeometry,
    ProjectGeometry,
};
pub use rows::{assign_rows, RowAssignment};
