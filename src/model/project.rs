// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::ProjectId;
use super::phase::{Phase, PhaseRecord};

/// Wire shape of a project as exported by the persistence service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phases: Vec<PhaseRecord>,
}

/// A decoded project snapshot.
///
/// Phase order is preserved as received; it carries no meaning on input but
/// is the tie-break for equal start dates during row assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
    phases: Vec<Phase>,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>, phases: Vec<Phase>) -> Self {
        Self { id, name: name.into(), phases }
    }

    /// Decodes a project record, dropping phases that fail to decode.
    ///
    /// A malformed phase (unparsable date, empty id) is a data-quality issue
    /// owned by the persistence service; the engine lays out the remaining
    /// phases instead of rejecting the project.
    pub fn from_record(record: &ProjectRecord) -> Result<Self, ProjectDecodeError> {
        let id = ProjectId::new(record.id.clone())
            .map_err(|_| ProjectDecodeError::InvalidId { value: record.id.clone() })?;
        let phases = record
            .phases
            .iter()
            .filter_map(|phase| Phase::from_record(phase).ok())
            .collect::<Vec<_>>();
        Ok(Self::new(id, record.name.clone(), phases))
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}

/// Decodes a portfolio snapshot, dropping projects whose own id is invalid.
pub fn decode_portfolio(records: &[ProjectRecord]) -> Vec<Project> {
    records.iter().filter_map(|record| Project::from_record(record).ok()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectDecodeError {
    InvalidId { value: String },
}

impl fmt::Display for ProjectDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { value } => write!(f, "invalid project id {value:?}"),
        }
    }
}

impl std::error::Error for ProjectDecodeError {}
