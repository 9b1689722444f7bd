// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dual-pane scroll synchronization and initial auto-focus.
//!
//! The project list and the timeline canvas scroll independently but must
//! always show the same vertical offset. Setting a pane's offset fires that
//! pane's own scroll notification synchronously, so the synchronizer carries
//! a reentrancy guard; without it the two handlers would trigger each other
//! forever.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::NaiveDate;

use crate::config::Px;
use crate::layout::DateAxis;

/// A vertically scrollable region of the rendering surface.
pub trait ScrollPane {
    fn vertical_offset(&self) -> Px;

    /// Writes the offset. In the rendering surface's event model this fires
    /// the pane's scroll handler synchronously before returning.
    fn set_vertical_offset(&mut self, offset: Px);
}

/// Keeps two panes' vertical offsets in lock-step.
///
/// Holds weak handles: a detached (unmounted) pane simply makes the copy a
/// no-op. The only mutable state is the guard flag, and it is always cleared
/// synchronously before a notification returns, so there is nothing to reset
/// when a pane goes away.
pub struct ScrollSync {
    left: Weak<RefCell<dyn ScrollPane>>,
    right: Weak<RefCell<dyn ScrollPane>>,
    syncing: Cell<bool>,
}

impl ScrollSync {
    pub fn new(left: &Rc<RefCell<dyn ScrollPane>>, right: &Rc<RefCell<dyn ScrollPane>>) -> Self {
        Self {
            left: Rc::downgrade(left),
            right: Rc::downgrade(right),
            syncing: Cell::new(false),
        }
    }

    /// The left pane scrolled: mirror its offset onto the right pane.
    pub fn on_left_scroll(&self) {
        self.mirror(&self.left, &self.right);
    }

    /// The right pane scrolled: mirror its offset onto the left pane.
    pub fn on_right_scroll(&self) {
        self.mirror(&self.right, &self.left);
    }

    fn mirror(
        &self,
        source: &Weak<RefCell<dyn ScrollPane>>,
        target: &Weak<RefCell<dyn ScrollPane>>,
    ) {
        // A guarded call is the echo of our own offset write; stop here or
        // the two handlers recurse into each other (and into a double
        // borrow of the pane being written).
        if self.syncing.get() {
            return;
        }
        let Some(source) = source.upgrade() else {
            return;
        };
        let Some(target) = target.upgrade() else {
            return;
        };

        let offset = source.borrow().vertical_offset();
        self.syncing.set(true);
        target.borrow_mut().set_vertical_offset(offset);
        self.syncing.set(false);
    }
}

/// One-shot scroll request that centers "today" on first load.
///
/// Callers ask for a target after each completed draw; the request is only
/// produced once the pane reports a usable width (layout has settled) and
/// never again after that.
#[derive(Debug, Clone, Default)]
pub struct AutoFocus {
    fired: bool,
}

impl AutoFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        !self.fired
    }

    pub fn target(&mut self, axis: &DateAxis, today: NaiveDate, pane_width_px: Px) -> Option<Px> {
        if self.fired || pane_width_px <= 0 {
            return None;
        }
        self.fired = true;
        Some((axis.date_to_x(today) - pane_width_px / 2).max(0))
    }
}
