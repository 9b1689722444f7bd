// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Phaseline — project-portfolio timeline layout engine with a dual-pane TUI.
//!
//! The layout pipeline is pure and deterministic: decoded projects go through
//! interval-partitioned row assignment ([`layout::assign_rows`]), a date axis
//! ([`layout::DateAxis`]), and a geometry builder ([`layout::layout_portfolio`]).
//! [`sync`] adds dual-pane scroll mirroring and the one-shot "today" focus; the
//! [`tui`] viewer renders the geometry onto a character grid.

pub mod config;
pub mod layout;
pub mod model;
pub mod store;
pub mod sync;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
