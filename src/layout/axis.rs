// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::{Px, TimelineConfig};

/// Calendar months covered by the header band.
pub const HEADER_MONTHS: usize = 6;

/// Week marks emitted by the header band.
pub const HEADER_WEEKS: usize = 26;

/// Maps calendar dates onto the horizontal pixel axis.
///
/// The axis is anchored at the configured anchor date; dates before it map to
/// negative positions. All outputs are pure functions of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateAxis {
    anchor: NaiveDate,
    pixels_per_day: Px,
    week_width_px: Px,
}

impl DateAxis {
    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            anchor: config.anchor(),
            pixels_per_day: config.pixels_per_day(),
            week_width_px: config.week_width_px(),
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// `(date - anchor in days) * pixels_per_day`, exact.
    pub fn date_to_x(&self, date: NaiveDate) -> Px {
        date.signed_duration_since(self.anchor).num_days() * self.pixels_per_day
    }

    /// Month and week bands for the header.
    ///
    /// Months are day-accurate (`days_in_month * pixels_per_day` wide). Week
    /// marks start at the first Monday on/after the anchor and are spaced by
    /// the fixed week width, so they drift against the day-accurate bars
    /// whenever `week_width_px != pixels_per_day * 7`.
    pub fn build_header(&self) -> TimelineHeader {
        let mut months = Vec::with_capacity(HEADER_MONTHS);
        let mut cursor = month_start(self.anchor);
        for _ in 0..HEADER_MONTHS {
            let next = next_month_start(cursor);
            let days = next.signed_duration_since(cursor).num_days();
            months.push(MonthBand {
                label: cursor.format("%b %Y").to_string(),
                width_px: days * self.pixels_per_day,
            });
            cursor = next;
        }

        let first_monday = first_monday_on_or_after(self.anchor);
        let origin_x = self.date_to_x(first_monday);
        let weeks = (0..HEADER_WEEKS)
            .map(|index| {
                let monday = first_monday + Duration::days(7 * index as i64);
                WeekMark {
                    label: monday.format("%m/%d").to_string(),
                    x_px: origin_x + index as Px * self.week_width_px,
                }
            })
            .collect();

        TimelineHeader { months, weeks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineHeader {
    months: Vec<MonthBand>,
    weeks: Vec<WeekMark>,
}

impl TimelineHeader {
    pub fn months(&self) -> &[MonthBand] {
        &self.months
    }

    pub fn weeks(&self) -> &[WeekMark] {
        &self.weeks
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBand {
    label: String,
    width_px: Px,
}

impl MonthBand {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width_px(&self) -> Px {
        self.width_px
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekMark {
    label: String,
    x_px: Px,
}

impl WeekMark {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x_px(&self) -> Px {
        self.x_px
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month exists")
}

fn first_monday_on_or_after(date: NaiveDate) -> NaiveDate {
    let offset = (7 - date.weekday().num_days_from_monday() as i64) % 7;
    date + Duration::days(offset)
}
