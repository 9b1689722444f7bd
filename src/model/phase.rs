// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::PhaseId;

/// Wire shape of a phase as exported by the persistence service.
///
/// Dates arrive as ISO-8601 date strings and are not pre-validated: parsing
/// happens in [`Phase::from_record`], and records that fail to parse are
/// excluded from layout rather than surfaced as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecord {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub progress: u8,
}

/// A decoded phase snapshot.
///
/// `end_date < start_date` is possible (upstream data may be provisional);
/// the engine treats such a phase as a zero-width interval at `start_date`
/// via [`Phase::effective_end_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    id: PhaseId,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    progress: u8,
}

impl Phase {
    pub fn new(
        id: PhaseId,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        progress: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_date,
            end_date,
            progress: progress.min(100),
        }
    }

    pub fn from_record(record: &PhaseRecord) -> Result<Self, PhaseDecodeError> {
        let id = PhaseId::new(record.id.clone())
            .map_err(|_| PhaseDecodeError::InvalidId { value: record.id.clone() })?;
        let start_date = record.start_date.parse::<NaiveDate>().map_err(|_| {
            PhaseDecodeError::UnparsableDate {
                field: PhaseDateField::Start,
                value: record.start_date.clone(),
            }
        })?;
        let end_date = record.end_date.parse::<NaiveDate>().map_err(|_| {
            PhaseDecodeError::UnparsableDate {
                field: PhaseDateField::End,
                value: record.end_date.clone(),
            }
        })?;
        Ok(Self::new(id, record.name.clone(), start_date, end_date, record.progress))
    }

    pub fn id(&self) -> &PhaseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// End date as the row assigner and geometry builder see it: an inverted
    /// range collapses to a zero-width interval at `start_date`.
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.max(self.start_date)
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseDateField {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseDecodeError {
    InvalidId { value: String },
    UnparsableDate { field: PhaseDateField, value: String },
}

impl fmt::Display for PhaseDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { value } => write!(f, "invalid phase id {value:?}"),
            Self::UnparsableDate { field, value } => {
                let field = match field {
                    PhaseDateField::Start => "start",
                    PhaseDateField::End => "end",
                };
                write!(f, "unparsable phase {field} date {value:?}")
            }
        }
    }
}

impl std::error::Error for PhaseDecodeError {}
