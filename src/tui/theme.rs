// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

/// Character classes the canvas painter emits; the theme maps them to styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CanvasInk {
    BarFilled,
    BarRemainder,
    Connector,
    Today,
    Blank,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TuiTheme;

impl TuiTheme {
    pub(crate) fn ink_style(&self, ink: CanvasInk) -> Style {
        match ink {
            CanvasInk::BarFilled => Style::default().fg(Color::LightGreen),
            CanvasInk::BarRemainder => Style::default().fg(Color::Green),
            CanvasInk::Connector => Style::default().fg(Color::DarkGray),
            CanvasInk::Today => Style::default().fg(Color::LightRed),
            CanvasInk::Blank => Style::default(),
        }
    }

    pub(crate) fn month_header_style(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn week_header_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub(crate) fn project_name_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn phase_label_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    }

    pub(crate) fn footer_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
