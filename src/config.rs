// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Engine configuration.
//!
//! All geometry is a deterministic function of a [`TimelineConfig`]; there is
//! no ambient clock or module-level state, so tests inject arbitrary anchors
//! and scales.

use chrono::NaiveDate;

/// Pixel scalar used throughout the engine.
///
/// Positions left of the anchor are negative, so this is signed; integer
/// arithmetic keeps the date-to-pixel mapping exact across repeated calls.
pub type Px = i64;

/// Display constants for the timeline.
///
/// `week_width_px` is intentionally an independent constant rather than
/// `pixels_per_day * 7`: the week header is a visual grid while phase bars
/// use the day-accurate mapping, and the two drift apart over the 26-week
/// header span. That mismatch is observed product behavior and is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineConfig {
    anchor: NaiveDate,
    pixels_per_day: Px,
    week_width_px: Px,
    bar_height_px: Px,
    row_gap_px: Px,
    base_top_offset_px: Px,
    min_bar_width_px: Px,
}

impl TimelineConfig {
    /// Dashboard defaults at the given anchor date.
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            pixels_per_day: 4,
            week_width_px: 30,
            bar_height_px: 18,
            row_gap_px: 6,
            base_top_offset_px: 8,
            min_bar_width_px: 3,
        }
    }

    /// One terminal cell per day, one cell per row; used by the TUI viewer.
    pub fn terminal_cells(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            pixels_per_day: 1,
            week_width_px: 8,
            bar_height_px: 1,
            row_gap_px: 0,
            base_top_offset_px: 0,
            min_bar_width_px: 1,
        }
    }

    pub fn with_pixels_per_day(mut self, pixels_per_day: Px) -> Self {
        self.pixels_per_day = pixels_per_day;
        self
    }

    pub fn with_week_width_px(mut self, week_width_px: Px) -> Self {
        self.week_width_px = week_width_px;
        self
    }

    pub fn with_bar_height_px(mut self, bar_height_px: Px) -> Self {
        self.bar_height_px = bar_height_px;
        self
    }

    pub fn with_row_gap_px(mut self, row_gap_px: Px) -> Self {
        self.row_gap_px = row_gap_px;
        self
    }

    pub fn with_base_top_offset_px(mut self, base_top_offset_px: Px) -> Self {
        self.base_top_offset_px = base_top_offset_px;
        self
    }

    pub fn with_min_bar_width_px(mut self, min_bar_width_px: Px) -> Self {
        self.min_bar_width_px = min_bar_width_px;
        self
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn pixels_per_day(&self) -> Px {
        self.pixels_per_day
    }

    pub fn week_width_px(&self) -> Px {
        self.week_width_px
    }

    pub fn bar_height_px(&self) -> Px {
        self.bar_height_px
    }

    pub fn row_gap_px(&self) -> Px {
        self.row_gap_px
    }

    pub fn base_top_offset_px(&self) -> Px {
        self.base_top_offset_px
    }

    pub fn min_bar_width_px(&self) -> Px {
        self.min_bar_width_px
    }
}
