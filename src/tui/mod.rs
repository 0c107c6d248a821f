// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Shows the pipeline board full-screen (ratatui + crossterm) and re-runs the layout engine on
//! every frame, so status changes from a reloaded job file and terminal resizes show up
//! immediately.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    buffer::Buffer,
    prelude::*,
    widgets::{Paragraph, Widget},
};
use tracing::{error, info, warn};

use crate::layout::{LayoutDiagnostic, LayoutEngine};
use crate::model::Job;
use crate::render::{Board, Canvas};
use crate::store::JobSource;

mod theme;

use theme::TuiTheme;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive board until the user quits.
///
/// The first load of `source` must succeed; later reload failures are shown in the footer and the
/// previous job list stays on screen.
pub fn run(source: JobSource, engine: LayoutEngine) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(source, engine)?;
    let mut terminal = TerminalSession::new()?;
    info!(source = %app.source.label(), jobs = app.jobs.len(), "board started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app, &theme))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

struct App {
    source: JobSource,
    engine: LayoutEngine,
    jobs: Vec<Job>,
    board: Board,
    stage_count: usize,
    diagnostics: Vec<LayoutDiagnostic>,
    last_error: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(source: JobSource, engine: LayoutEngine) -> Result<Self, Box<dyn Error>> {
        let jobs = source.load()?;
        Ok(Self {
            source,
            engine,
            jobs,
            board: Board::new(0, 0)?,
            stage_count: 0,
            diagnostics: Vec::new(),
            last_error: None,
            should_quit: false,
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn reload(&mut self) {
        match self.source.load() {
            Ok(jobs) => {
                info!(source = %self.source.label(), jobs = jobs.len(), "reloaded jobs");
                self.jobs = jobs;
                // The old boxes may belong to jobs or columns that no longer exist.
                self.board.reset();
                self.last_error = None;
            }
            Err(err) => {
                warn!(source = %self.source.label(), %err, "reload failed");
                self.last_error = Some(format!("reload failed: {err}"));
            }
        }
    }

    /// Fits the board to `width` x `height` and runs one layout pass over the current jobs.
    fn layout_pass(&mut self, width: u16, height: u16) {
        match self.board.resize(usize::from(width), usize::from(height)) {
            Ok(true) => info!(width, height, "board resized, new layout session"),
            Ok(false) => {}
            Err(err) => {
                self.last_error = Some(err.to_string());
                return;
            }
        }

        self.board.clear_cells();
        match self.engine.redraw(&self.jobs, &mut self.board) {
            Ok(report) => {
                self.stage_count = report.stage_count;
                self.diagnostics = report.diagnostics;
                if self.last_error.as_deref().is_some_and(|msg| msg.starts_with("layout: ")) {
                    self.last_error = None;
                }
            }
            Err(err) => {
                let message = format!("layout: {err}");
                // Retried every frame; only log when the failure changes.
                if self.last_error.as_deref() != Some(message.as_str()) {
                    error!(%err, "layout pass aborted");
                }
                self.last_error = Some(message);
            }
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App, theme: &TuiTheme) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.size());
    let (board_area, footer_area) = (areas[0], areas[1]);

    app.layout_pass(board_area.width, board_area.height);
    let canvas = app.board.compose();
    frame.render_widget(BoardWidget { canvas: &canvas, theme }, board_area);
    frame.render_widget(Paragraph::new(footer_line(app, theme)), footer_area);
}

/// Paints a composed board canvas cell by cell with theme colors.
struct BoardWidget<'a> {
    canvas: &'a Canvas,
    theme: &'a TuiTheme,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base_style());
        for (x, y, ch, color) in self.canvas.iter_cells() {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if x >= area.width || y >= area.height {
                continue;
            }
            buf.get_mut(area.x + x, area.y + y)
                .set_char(ch)
                .set_style(self.theme.glyph_style(color));
        }
    }
}

fn footer_line(app: &App, theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for (key, label) in [("q", "quit"), ("r", "reload")] {
        spans.push(Span::styled(format!(" {key}"), theme.footer_key_style()));
        spans.push(Span::styled(format!(" {label} "), theme.footer_label_style()));
    }

    spans.push(Span::styled(
        format!("| {} · {} jobs · {} stages", app.source.label(), app.jobs.len(), app.stage_count),
        theme.footer_label_style(),
    ));

    if let Some(diagnostic) = app.diagnostics.first() {
        spans.push(Span::styled(format!(" | {diagnostic}"), theme.footer_label_style()));
    }
    if let Some(err) = &app.last_error {
        spans.push(Span::styled(format!(" | {err}"), theme.error_style()));
    }

    Line::from(spans)
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

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|err| {
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
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
