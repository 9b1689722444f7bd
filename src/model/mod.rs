// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Projects contain date-bounded phases; both exist as wire records (ISO-8601
//! date strings from the persistence service) and decoded engine snapshots.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod phase;
pub mod project;

pub use ids::{Id, IdError, PhaseId, ProjectId};
pub use phase::{Phase, PhaseDateField, PhaseDecodeError, PhaseRecord};
pub use project::{decode_portfolio, Project, ProjectDecodeError, ProjectRecord};
