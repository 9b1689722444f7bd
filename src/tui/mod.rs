// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Dual-pane viewer (ratatui + crossterm): project list on the left, timeline
//! canvas on the right. Both panes render from the same portfolio geometry,
//! scroll in lock-step through [`crate::sync::ScrollSync`], and the canvas
//! centers on "today" once after the first draw.

use std::cell::RefCell;
use std::error::Error;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::config::{Px, TimelineConfig};
use crate::layout::{layout_portfolio, DateAxis, PortfolioGeometry};
use crate::model::{PhaseRecord, Project, ProjectRecord};
use crate::sync::{AutoFocus, ScrollPane, ScrollSync};

mod theme;

use theme::{CanvasInk, TuiTheme};

const LIST_PANE_WIDTH: u16 = 28;
const HEADER_LINES: u16 = 2;
const HORIZONTAL_STEP: Px = 4;

const BAR_FILLED: char = '█';
const BAR_REMAINDER: char = '▒';
const CONNECTOR: char = '─';
const TODAY_MARK: char = '│';

/// Runs the viewer over a decoded portfolio.
///
/// The config must be cell-scaled (one pixel = one terminal cell, see
/// [`TimelineConfig::terminal_cells`]); the viewer maps pixel geometry onto
/// the character grid one-to-one.
pub fn run(
    projects: Vec<Project>,
    config: TimelineConfig,
    today: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(projects, config, today);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;
        app.apply_auto_focus();

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Built-in demo portfolio, used by `--demo`.
///
/// Includes a phase with an unparsable date and one with an inverted range so
/// the degradation paths are visible, not just tested.
pub fn demo_portfolio() -> Vec<ProjectRecord> {
    fn phase(id: &str, name: &str, start: &str, end: &str, progress: u8) -> PhaseRecord {
        PhaseRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            start_date: start.to_owned(),
            end_date: end.to_owned(),
            progress,
        }
    }

    vec![
        ProjectRecord {
            id: "prj-website".to_owned(),
            name: "Website Relaunch".to_owned(),
            phases: vec![
                phase("ph-design", "Design", "2026-01-05", "2026-02-06", 100),
                phase("ph-build", "Build", "2026-01-26", "2026-03-20", 55),
                phase("ph-uat", "UAT", "2026-03-23", "2026-04-10", 0),
            ],
        },
        ProjectRecord {
            id: "prj-crm".to_owned(),
            name: "CRM Migration".to_owned(),
            phases: vec![
                phase("ph-extract", "Extract", "2026-02-02", "2026-02-27", 80),
                phase("ph-load", "Load", "2026-02-16", "2026-03-13", 30),
                phase("ph-verify", "Verify", "2026-03-02", "2026-03-27", 0),
                phase("ph-cutover", "Cutover", "2026-04-06", "2026-04-17", 0),
            ],
        },
        ProjectRecord {
            id: "prj-mobile".to_owned(),
            name: "Mobile App".to_owned(),
            phases: vec![
                phase("ph-scope", "Scoping", "2026-01-12", "2026-01-23", 100),
                // Provisional record: end precedes start; rendered clamped.
                phase("ph-proto", "Prototype", "2026-02-20", "2026-02-09", 10),
                // Data-quality escapee: dropped at decode, never laid out.
                phase("ph-tbd", "TBD", "when funded", "2026-06-30", 0),
            ],
        },
        ProjectRecord {
            id: "prj-audit".to_owned(),
            name: "Security Audit".to_owned(),
            phases: Vec::new(),
        },
    ]
}

/// Anchor for a portfolio: the first of the month of the earliest phase
/// start, falling back to the first of `today`'s month.
pub fn default_anchor(projects: &[Project], today: NaiveDate) -> NaiveDate {
    let earliest = projects
        .iter()
        .flat_map(|project| project.phases())
        .map(|phase| phase.start_date())
        .min()
        .unwrap_or(today);
    earliest.with_day(1).expect("day 1 exists in every month")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusedPane {
    List,
    Canvas,
}

/// Scroll state of one pane; offsets are clamped on write.
#[derive(Debug)]
struct PaneState {
    offset: Px,
    max_offset: Px,
}

impl PaneState {
    fn new() -> Self {
        Self { offset: 0, max_offset: 0 }
    }

    fn set_max_offset(&mut self, max_offset: Px) {
        self.max_offset = max_offset.max(0);
        self.offset = self.offset.min(self.max_offset);
    }
}

impl ScrollPane for PaneState {
    fn vertical_offset(&self) -> Px {
        self.offset
    }

    fn set_vertical_offset(&mut self, offset: Px) {
        self.offset = offset.clamp(0, self.max_offset);
    }
}

struct App {
    projects: Vec<Project>,
    config: TimelineConfig,
    today: NaiveDate,
    geometry: PortfolioGeometry,
    theme: TuiTheme,
    list_pane: Rc<RefCell<PaneState>>,
    canvas_pane: Rc<RefCell<PaneState>>,
    sync: ScrollSync,
    auto_focus: AutoFocus,
    focused: FocusedPane,
    horizontal_offset: Px,
    body_height: Px,
    canvas_view_width: Px,
    should_quit: bool,
}

impl App {
    fn new(projects: Vec<Project>, config: TimelineConfig, today: NaiveDate) -> Self {
        let geometry = layout_portfolio(&projects, &config, today);
        let list_pane = Rc::new(RefCell::new(PaneState::new()));
        let canvas_pane = Rc::new(RefCell::new(PaneState::new()));
        let list_dyn: Rc<RefCell<dyn ScrollPane>> = list_pane.clone();
        let canvas_dyn: Rc<RefCell<dyn ScrollPane>> = canvas_pane.clone();
        let sync = ScrollSync::new(&list_dyn, &canvas_dyn);

        Self {
            projects,
            config,
            today,
            geometry,
            theme: TuiTheme,
            list_pane,
            canvas_pane,
            sync,
            auto_focus: AutoFocus::new(),
            focused: FocusedPane::Canvas,
            horizontal_offset: 0,
            body_height: 0,
            canvas_view_width: 0,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.focused = match self.focused {
                    FocusedPane::List => FocusedPane::Canvas,
                    FocusedPane::Canvas => FocusedPane::List,
                };
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_focused_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_focused_by(-1),
            KeyCode::PageDown => self.scroll_focused_by(self.body_height.max(1)),
            KeyCode::PageUp => self.scroll_focused_by(-self.body_height.max(1)),
            KeyCode::Char('h') | KeyCode::Left => self.pan_by(-HORIZONTAL_STEP),
            KeyCode::Char('l') | KeyCode::Right => self.pan_by(HORIZONTAL_STEP),
            KeyCode::Char('t') => self.center_today(),
            _ => {}
        }
    }

    /// Scrolls the focused pane and lets the synchronizer mirror the offset
    /// onto the other pane.
    fn scroll_focused_by(&mut self, delta: Px) {
        match self.focused {
            FocusedPane::List => {
                let offset = self.list_pane.borrow().vertical_offset() + delta;
                self.list_pane.borrow_mut().set_vertical_offset(offset);
                self.sync.on_left_scroll();
            }
            FocusedPane::Canvas => {
                let offset = self.canvas_pane.borrow().vertical_offset() + delta;
                self.canvas_pane.borrow_mut().set_vertical_offset(offset);
                self.sync.on_right_scroll();
            }
        }
    }

    fn pan_by(&mut self, delta: Px) {
        let max = (canvas_width_px(&self.geometry) - self.canvas_view_width).max(0);
        self.horizontal_offset = (self.horizontal_offset + delta).clamp(0, max);
    }

    fn center_today(&mut self) {
        let max = (canvas_width_px(&self.geometry) - self.canvas_view_width).max(0);
        let target = self.geometry.today_x_px() - self.canvas_view_width / 2;
        self.horizontal_offset = target.clamp(0, max);
    }

    /// One-shot initial focus, applied after a draw has sized the canvas.
    fn apply_auto_focus(&mut self) {
        if !self.auto_focus.is_pending() {
            return;
        }
        let axis = DateAxis::new(&self.config);
        if let Some(target) = self.auto_focus.target(&axis, self.today, self.canvas_view_width) {
            let max = (canvas_width_px(&self.geometry) - self.canvas_view_width).max(0);
            self.horizontal_offset = target.min(max);
        }
    }

    fn measure(&mut self, body_height: Px, canvas_view_width: Px) {
        self.body_height = body_height;
        self.canvas_view_width = canvas_view_width;
        let max_offset = self.geometry.total_height_px() - body_height;
        self.list_pane.borrow_mut().set_max_offset(max_offset);
        self.canvas_pane.borrow_mut().set_max_offset(max_offset);
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LIST_PANE_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    let list_block = Block::default()
        .title("Projects")
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style(app.focused == FocusedPane::List));
    let canvas_block = Block::default()
        .title("Timeline")
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style(app.focused == FocusedPane::Canvas));

    let list_inner = list_block.inner(panes[0]);
    let canvas_inner = canvas_block.inner(panes[1]);
    let body_height = Px::from(canvas_inner.height.saturating_sub(HEADER_LINES));
    app.measure(body_height, Px::from(canvas_inner.width));

    // The list pane leaves the header rows blank so project rows line up
    // with the canvas body across the split.
    let mut list_lines = vec![Line::default(); HEADER_LINES as usize];
    let scrolled = list_pane_lines(&app.projects, &app.geometry, &app.theme)
        .into_iter()
        .skip(app.list_pane.borrow().vertical_offset().max(0) as usize);
    list_lines.extend(scrolled);

    let width = canvas_width_px(&app.geometry);
    let mut canvas_lines = vec![
        styled_canvas_line(&month_header_chars(&app.geometry, width), &app.theme, true),
        styled_canvas_line(&week_header_chars(&app.geometry, width), &app.theme, false),
    ];
    let body = canvas_body_chars(&app.projects, &app.geometry, width);
    canvas_lines.extend(
        body.iter()
            .skip(app.canvas_pane.borrow().vertical_offset().max(0) as usize)
            .map(|chars| canvas_body_line(chars, &app.theme)),
    );

    frame.render_widget(list_block, panes[0]);
    frame.render_widget(Paragraph::new(list_lines), list_inner);
    frame.render_widget(canvas_block, panes[1]);
    frame.render_widget(
        Paragraph::new(canvas_lines).scroll((0, app.horizontal_offset.max(0) as u16)),
        canvas_inner,
    );

    let footer = Line::styled(
        "  j/k scroll · Tab focus · h/l pan · t today · q quit",
        app.theme.footer_style(),
    );
    frame.render_widget(Paragraph::new(footer), rows[1]);
}

/// Widest pixel column the canvas has to cover.
fn canvas_width_px(geometry: &PortfolioGeometry) -> Px {
    let months: Px = geometry.header().months().iter().map(|m| m.width_px()).sum();
    let weeks = geometry
        .header()
        .weeks()
        .last()
        .map(|mark| mark.x_px() + mark.label().len() as Px)
        .unwrap_or(0);
    let bars = geometry
        .projects()
        .iter()
        .flat_map(|project| project.phases())
        .map(|rect| rect.left_px() + rect.width_px())
        .max()
        .unwrap_or(0);
    months.max(weeks).max(bars).max(geometry.today_x_px() + 1).max(0)
}

fn write_at(line: &mut [char], x: Px, text: &str) {
    for (index, ch) in text.chars().enumerate() {
        let col = x + index as Px;
        if col < 0 {
            continue;
        }
        let Some(cell) = line.get_mut(col as usize) else {
            break;
        };
        *cell = ch;
    }
}

fn fill_span(line: &mut [char], from: Px, to: Px, ch: char) {
    let from = from.max(0);
    for col in from..to.max(from) {
        let Some(cell) = line.get_mut(col as usize) else {
            break;
        };
        *cell = ch;
    }
}

fn month_header_chars(geometry: &PortfolioGeometry, width: Px) -> Vec<char> {
    let mut line = vec![' '; width.max(0) as usize];
    let mut cursor: Px = 0;
    for band in geometry.header().months() {
        let label: String = band.label().chars().take(band.width_px().max(0) as usize).collect();
        write_at(&mut line, cursor, &label);
        cursor += band.width_px();
    }
    line
}

fn week_header_chars(geometry: &PortfolioGeometry, width: Px) -> Vec<char> {
    let mut line = vec![' '; width.max(0) as usize];
    for mark in geometry.header().weeks() {
        write_at(&mut line, mark.x_px(), mark.label());
    }
    line
}

/// Paints every project's rows into a character grid, one line per row.
///
/// Geometry rows map one-to-one onto lines because the viewer's config is
/// cell-scaled (bar height 1, no gaps, no base offset).
fn canvas_body_chars(
    projects: &[Project],
    geometry: &PortfolioGeometry,
    width: Px,
) -> Vec<Vec<char>> {
    let mut lines = Vec::new();
    for (project, project_geometry) in projects.iter().zip(geometry.projects()) {
        let mut block = vec![vec![' '; width.max(0) as usize]; project_geometry.total_rows()];

        for connector in project_geometry.connectors() {
            fill_span(
                &mut block[connector.row()],
                connector.from_x_px(),
                connector.to_x_px(),
                CONNECTOR,
            );
        }

        // Rects are in phase input order, so zipping recovers progress.
        for (phase, rect) in project.phases().iter().zip(project_geometry.phases()) {
            let filled = rect.width_px() * Px::from(phase.progress()) / 100;
            let left = rect.left_px();
            fill_span(&mut block[rect.row()], left, left + filled, BAR_FILLED);
            fill_span(&mut block[rect.row()], left + filled, left + rect.width_px(), BAR_REMAINDER);
        }

        for line in &mut block {
            let col = geometry.today_x_px();
            if col >= 0 {
                if let Some(cell) = line.get_mut(col as usize) {
                    if *cell == ' ' {
                        *cell = TODAY_MARK;
                    }
                }
            }
        }

        lines.extend(block);
    }
    lines
}

fn ink_of(ch: char) -> CanvasInk {
    match ch {
        BAR_FILLED => CanvasInk::BarFilled,
        BAR_REMAINDER => CanvasInk::BarRemainder,
        CONNECTOR => CanvasInk::Connector,
        TODAY_MARK => CanvasInk::Today,
        _ => CanvasInk::Blank,
    }
}

/// Groups consecutive same-ink characters into styled spans.
fn canvas_body_line(chars: &[char], theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_ink = None;
    for &ch in chars {
        let ink = ink_of(ch);
        if run_ink != Some(ink) && !run.is_empty() {
            let ink_done = run_ink.expect("non-empty run has an ink");
            spans.push(Span::styled(std::mem::take(&mut run), theme.ink_style(ink_done)));
        }
        run_ink = Some(ink);
        run.push(ch);
    }
    if let (Some(ink), false) = (run_ink, run.is_empty()) {
        spans.push(Span::styled(run, theme.ink_style(ink)));
    }
    Line::from(spans)
}

fn styled_canvas_line(chars: &[char], theme: &TuiTheme, months: bool) -> Line<'static> {
    let style = if months { theme.month_header_style() } else { theme.week_header_style() };
    Line::styled(chars.iter().collect::<String>(), style)
}

/// Mirrored list rows.
///
/// Each project emits exactly as many lines as its canvas block has rows,
/// taken from the shared geometry; that identity is what keeps the panes
/// aligned, so this function never computes heights on its own.
fn list_pane_lines(
    projects: &[Project],
    geometry: &PortfolioGeometry,
    theme: &TuiTheme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (project, project_geometry) in projects.iter().zip(geometry.projects()) {
        for row in 0..project_geometry.total_rows() {
            let names = project
                .phases()
                .iter()
                .filter(|phase| project_geometry.assignment().row_of(phase.id()) == Some(row))
                .map(|phase| phase.name().to_owned())
                .collect::<Vec<_>>()
                .join(", ");

            let mut spans = Vec::new();
            if row == 0 {
                spans.push(Span::styled(project.name().to_owned(), theme.project_name_style()));
                if !names.is_empty() {
                    spans.push(Span::raw("  "));
                }
            } else {
                spans.push(Span::raw("  "));
            }
            if !names.is_empty() {
                spans.push(Span::styled(names, theme.phase_label_style()));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};

    use super::{
        canvas_body_chars, canvas_width_px, default_anchor, demo_portfolio, list_pane_lines,
        month_header_chars, App, FocusedPane, TuiTheme,
    };
    use crate::config::TimelineConfig;
    use crate::layout::layout_portfolio;
    use crate::model::{decode_portfolio, fixtures, Project};

    fn cell_config() -> TimelineConfig {
        TimelineConfig::terminal_cells(fixtures::date("2026-01-01"))
    }

    fn demo_projects() -> Vec<Project> {
        decode_portfolio(&demo_portfolio())
    }

    #[test]
    fn demo_portfolio_survives_decode_with_known_losses() {
        let projects = demo_projects();
        assert_eq!(projects.len(), 4);
        // "TBD" has an unparsable start date and is dropped at decode.
        let mobile = &projects[2];
        let phases = mobile.phases().iter().map(|p| p.name()).collect::<Vec<_>>();
        assert_eq!(phases, vec!["Scoping", "Prototype"]);
    }

    #[test]
    fn default_anchor_snaps_to_the_earliest_phase_month() {
        let projects = demo_projects();
        let today = fixtures::date("2026-06-15");
        assert_eq!(default_anchor(&projects, today), fixtures::date("2026-01-01"));
    }

    #[test]
    fn default_anchor_falls_back_to_today_for_an_empty_portfolio() {
        let today = fixtures::date("2026-06-15");
        assert_eq!(default_anchor(&[], today), fixtures::date("2026-06-01"));
    }

    #[test]
    fn month_header_places_labels_at_band_starts() {
        let config = cell_config();
        let geometry = layout_portfolio(&[], &config, fixtures::date("2026-01-10"));
        let width = canvas_width_px(&geometry);
        let line: String = month_header_chars(&geometry, width).iter().collect();

        assert!(line.starts_with("Jan"), "unexpected header: {line}");
        // February's band starts 31 cells in at one cell per day.
        assert_eq!(&line[31..34], "Feb");
    }

    #[test]
    fn canvas_rows_mirror_list_rows_per_project() {
        let projects =
            vec![fixtures::staggered_project(), fixtures::fully_overlapping_project()];
        let config = cell_config();
        let geometry = layout_portfolio(&projects, &config, fixtures::date("2026-01-10"));

        let body = canvas_body_chars(&projects, &geometry, canvas_width_px(&geometry));
        let list = list_pane_lines(&projects, &geometry, &TuiTheme);
        assert_eq!(body.len(), list.len());
        assert_eq!(body.len() as i64, geometry.total_height_px());
    }

    #[test]
    fn bars_and_today_marker_land_in_the_grid() {
        let projects = vec![fixtures::staggered_project()];
        let config = cell_config();
        let geometry = layout_portfolio(&projects, &config, fixtures::date("2026-01-25"));
        let body = canvas_body_chars(&projects, &geometry, canvas_width_px(&geometry));

        // Staggered project: two rows. P1 spans cells 0..9 on row 0 at 0%
        // progress, so the remainder glyph is used.
        assert_eq!(body.len(), 2);
        assert_eq!(body[0][0], super::BAR_REMAINDER);
        assert_eq!(body[0][8], super::BAR_REMAINDER);
        // Jan 25 is cell 24, clear of any bar on row 1.
        assert_eq!(body[1][24], super::TODAY_MARK);
    }

    #[test]
    fn scrolling_one_pane_drags_the_other() {
        let mut app = App::new(demo_projects(), cell_config(), fixtures::date("2026-02-01"));
        app.measure(3, 80);
        assert_eq!(app.focused, FocusedPane::Canvas);

        app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(app.canvas_pane.borrow().offset, 2);
        assert_eq!(app.list_pane.borrow().offset, 2);

        app.handle_key(KeyEvent::from(KeyCode::Tab));
        app.handle_key(KeyEvent::from(KeyCode::Char('k')));
        assert_eq!(app.list_pane.borrow().offset, 1);
        assert_eq!(app.canvas_pane.borrow().offset, 1);
    }

    #[test]
    fn vertical_offset_clamps_to_content_height() {
        let mut app = App::new(demo_projects(), cell_config(), fixtures::date("2026-02-01"));
        app.measure(3, 80);

        for _ in 0..100 {
            app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        }
        let max = app.geometry.total_height_px() - 3;
        assert_eq!(app.canvas_pane.borrow().offset, max);
        assert_eq!(app.list_pane.borrow().offset, max);
    }

    #[test]
    fn auto_focus_fires_once_after_the_first_measured_draw() {
        let mut app = App::new(demo_projects(), cell_config(), fixtures::date("2026-03-02"));

        // Before any draw the pane is unsized; nothing happens.
        app.apply_auto_focus();
        assert_eq!(app.horizontal_offset, 0);
        assert!(app.auto_focus.is_pending());

        app.measure(10, 20);
        app.apply_auto_focus();
        let centered = app.horizontal_offset;
        assert!(centered > 0);

        // Re-draws (and manual pans) no longer re-trigger the focus.
        app.handle_key(KeyEvent::from(KeyCode::Char('h')));
        let panned = app.horizontal_offset;
        assert_ne!(panned, centered);
        app.apply_auto_focus();
        assert_eq!(app.horizontal_offset, panned);
    }
}
