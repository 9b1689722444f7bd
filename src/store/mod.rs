// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Portfolio snapshot files.
//!
//! The persistence service owns the project/phase records; this module only
//! reads the JSON snapshot it exports (and writes one for the demo). File
//! and shape errors surface as [`StoreError`]; per-phase data quality does
//! not — that is handled at decode time.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::ProjectRecord;

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid portfolio json at {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Reads a portfolio snapshot (a JSON array of project records).
pub fn load_portfolio(path: impl AsRef<Path>) -> Result<Vec<ProjectRecord>, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}

/// Writes a portfolio snapshot in the same shape `load_portfolio` reads.
pub fn save_portfolio(
    path: impl AsRef<Path>,
    records: &[ProjectRecord],
) -> Result<(), StoreError> {
    let path = path.as_ref();
    let raw = serde_json::to_string_pretty(records)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    fs::write(path, raw).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })
}
