// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end pipeline checks against a JSON portfolio fixture: decode with
//! per-record degradation, row assignment, geometry, header, and the scroll /
//! focus synchronizers, all through the public API.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::NaiveDate;

use phaseline::config::{Px, TimelineConfig};
use phaseline::layout::{layout_portfolio, DateAxis, PortfolioGeometry};
use phaseline::model::{decode_portfolio, Project, ProjectRecord};
use phaseline::sync::{AutoFocus, ScrollPane, ScrollSync};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("portfolio_layout")
}

fn load_projects() -> Vec<Project> {
    let path = fixtures_dir().join("portfolio.json");
    let raw = fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));
    let records: Vec<ProjectRecord> =
        serde_json::from_str(&raw).unwrap_or_else(|err| panic!("failed to decode {path:?}: {err}"));
    decode_portfolio(&records)
}

fn date(value: &str) -> NaiveDate {
    value.parse().expect("date")
}

fn config() -> TimelineConfig {
    TimelineConfig::new(date("2026-01-01"))
}

fn layout() -> PortfolioGeometry {
    layout_portfolio(&load_projects(), &config(), date("2026-01-08"))
}

#[test]
fn decode_drops_only_the_broken_phases() {
    let projects = load_projects();
    assert_eq!(projects.len(), 4);

    let degraded = &projects[2];
    assert_eq!(degraded.name(), "Degraded");
    let names: Vec<_> = degraded.phases().iter().map(|p| p.name()).collect();
    // The unparsable start date and the empty id fall out; the inverted
    // range is kept and clamped later.
    assert_eq!(names, vec!["Survivor", "Backwards"]);
}

#[test]
fn row_assignment_matches_the_staggered_and_stacked_shapes() {
    let geometry = layout();

    let staggered = &geometry.projects()[0];
    assert_eq!(staggered.total_rows(), 2);
    let row_of = |id: &str| {
        staggered
            .phases()
            .iter()
            .find(|rect| rect.phase_id().as_str() == id)
            .map(|rect| rect.row())
    };
    assert_eq!(row_of("P1"), Some(0));
    assert_eq!(row_of("P2"), Some(1));
    assert_eq!(row_of("P3"), Some(0));

    assert_eq!(geometry.projects()[1].total_rows(), 3);
    // Inverted range is zero-width at its start, so it shares row 0.
    assert_eq!(geometry.projects()[2].total_rows(), 1);
    // Empty project still claims one row.
    assert_eq!(geometry.projects()[3].total_rows(), 1);
}

#[test]
fn no_two_phases_overlap_within_a_row() {
    let projects = load_projects();
    let geometry = layout();

    for (project, project_geometry) in projects.iter().zip(geometry.projects()) {
        for a in project.phases() {
            for b in project.phases() {
                if a.id() == b.id() {
                    continue;
                }
                let same_row = project_geometry.assignment().row_of(a.id())
                    == project_geometry.assignment().row_of(b.id());
                if !same_row {
                    continue;
                }
                let disjoint = a.effective_end_date() <= b.start_date()
                    || b.effective_end_date() <= a.start_date();
                assert!(
                    disjoint,
                    "phases {} and {} share a row but overlap",
                    a.id(),
                    b.id()
                );
            }
        }
    }
}

#[test]
fn geometry_is_in_pixels_from_the_anchor() {
    let geometry = layout();
    let staggered = &geometry.projects()[0];

    let p1 = &staggered.phases()[0];
    assert_eq!(p1.left_px(), 0);
    assert_eq!(p1.width_px(), 36);
    assert_eq!(p1.top_px(), 14);
    assert_eq!(p1.height_px(), 18);

    // Inverted range renders as a minimum-width sliver at its start date.
    let backwards = geometry.projects()[2]
        .phases()
        .iter()
        .find(|rect| rect.phase_id().as_str() == "inverted")
        .expect("inverted phase laid out");
    assert_eq!(backwards.left_px(), 200);
    assert_eq!(backwards.width_px(), 3);

    assert_eq!(geometry.today_x_px(), 28);
}

#[test]
fn project_blocks_stack_into_the_total_height() {
    let geometry = layout();
    let heights: Vec<Px> =
        geometry.projects().iter().map(|project| project.row_height_px()).collect();
    assert_eq!(heights, vec![62, 86, 38, 38]);
    assert_eq!(geometry.total_height_px(), 224);
}

#[test]
fn connectors_only_bridge_strict_gaps() {
    let geometry = layout();
    let staggered = &geometry.projects()[0];

    assert_eq!(staggered.connectors().len(), 1);
    let connector = &staggered.connectors()[0];
    assert_eq!(connector.from_phase_id().as_str(), "P1");
    assert_eq!(connector.to_phase_id().as_str(), "P3");
    assert_eq!(connector.row(), 0);
    assert_eq!(connector.from_x_px(), 36);
    assert_eq!(connector.to_x_px(), 40);

    // Stacked phases all overlap; nothing to bridge.
    assert!(geometry.projects()[1].connectors().is_empty());
}

#[test]
fn header_spans_six_months_and_twenty_six_weeks() {
    let geometry = layout();
    let header = geometry.header();

    let labels: Vec<_> = header.months().iter().map(|band| band.label()).collect();
    assert_eq!(
        labels,
        vec!["Jan 2026", "Feb 2026", "Mar 2026", "Apr 2026", "May 2026", "Jun 2026"]
    );
    let widths: Vec<Px> = header.months().iter().map(|band| band.width_px()).collect();
    assert_eq!(widths, vec![124, 112, 124, 120, 124, 120]);

    assert_eq!(header.weeks().len(), 26);
    // First Monday on or after the anchor, then fixed-width columns.
    assert_eq!(header.weeks()[0].x_px(), 16);
    assert_eq!(header.weeks()[25].x_px(), 16 + 25 * 30);
}

#[test]
fn layout_is_deterministic_across_runs() {
    let first = layout();
    let second = layout();

    assert_eq!(first.total_height_px(), second.total_height_px());
    for (a, b) in first.projects().iter().zip(second.projects()) {
        assert_eq!(a.assignment().rows(), b.assignment().rows());
        let left_a: Vec<Px> = a.phases().iter().map(|rect| rect.left_px()).collect();
        let left_b: Vec<Px> = b.phases().iter().map(|rect| rect.left_px()).collect();
        assert_eq!(left_a, left_b);
    }
}

#[derive(Debug)]
struct Pane {
    offset: Px,
}

impl ScrollPane for Pane {
    fn vertical_offset(&self) -> Px {
        self.offset
    }

    fn set_vertical_offset(&mut self, offset: Px) {
        self.offset = offset;
    }
}

#[test]
fn panes_mirror_offsets_through_the_synchronizer() {
    let left: Rc<RefCell<dyn ScrollPane>> = Rc::new(RefCell::new(Pane { offset: 0 }));
    let right: Rc<RefCell<dyn ScrollPane>> = Rc::new(RefCell::new(Pane { offset: 0 }));
    let sync = ScrollSync::new(&left, &right);

    left.borrow_mut().set_vertical_offset(120);
    sync.on_left_scroll();
    assert_eq!(right.borrow().vertical_offset(), 120);

    right.borrow_mut().set_vertical_offset(40);
    sync.on_right_scroll();
    assert_eq!(left.borrow().vertical_offset(), 40);
}

#[test]
fn initial_focus_centers_today_exactly_once() {
    let axis = DateAxis::new(&config());
    let mut focus = AutoFocus::new();
    let today = date("2026-01-08");

    // Unsized pane: focus stays pending.
    assert_eq!(focus.target(&axis, today, 0), None);
    assert!(focus.is_pending());

    // 28px today marker centered in a 400px pane clamps to the left edge.
    assert_eq!(focus.target(&axis, today, 400), Some(0));
    assert!(!focus.is_pending());
    assert_eq!(focus.target(&axis, today, 400), None);
}
