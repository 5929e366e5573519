use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};
use tracing::{debug, info, warn};

use super::buffer::TextBuffer;
use super::constants::*;
use crate::clipboard::ClipboardSink;
use crate::config::AppConfig;
use crate::core::{ColorDetail, GridGeometry, GridMetrics, Palette, Viewport};
use crate::model::ColorValue;
use crate::parser;

mod commands;
mod input;
mod render;

use commands::Suggestion;

/// Terminal rows taken by the header and the status footer.
const CHROME_HEIGHT: u16 = 2;

/// Swatch grid sizes in terminal cells.
const TERMINAL_METRICS: GridMetrics = GridMetrics {
    sidebar_width: 24,
    box_width: 6,
    box_height: 3,
    compact_breakpoint: 60,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
    Detail,
    Command,
    Help,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

/// The value last written to the clipboard, shown as "Copied!" until it expires.
#[derive(Debug, Clone)]
struct CopiedValue {
    value: String,
    at: Instant,
}

#[derive(Debug, Clone, Copy)]
struct PendingResize {
    viewport: Viewport,
    at: Instant,
}

pub(crate) struct App {
    config: AppConfig,
    palette: Palette,
    viewport: Viewport,
    geometry: GridGeometry,
    pending_resize: Option<PendingResize>,
    cursor: usize,
    scroll_row: usize,
    input_mode: InputMode,
    input: TextBuffer,
    search_error: bool,
    detail: Option<ColorDetail>,
    detail_cursor: usize,
    copied: Option<CopiedValue>,
    clipboard: Box<dyn ClipboardSink>,
    suggestions: Vec<Suggestion>,
    suggestion_index: usize,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(
        config: AppConfig,
        palette: Palette,
        clipboard: Box<dyn ClipboardSink>,
        width: u16,
        height: u16,
    ) -> Self {
        let viewport = grid_viewport(width, height);
        let geometry = GridGeometry::fit(viewport, &TERMINAL_METRICS, palette.len());
        Self {
            config,
            palette,
            viewport,
            geometry,
            pending_resize: None,
            cursor: 0,
            scroll_row: 0,
            input_mode: InputMode::Normal,
            input: TextBuffer::new(),
            search_error: false,
            detail: None,
            detail_cursor: 0,
            copied: None,
            clipboard,
            suggestions: Vec::new(),
            suggestion_index: 0,
            status: None,
            should_quit: false,
        }
    }

    pub(crate) fn on_tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Expire the copied marker and status line, and apply a settled resize.
    pub(crate) fn tick_at(&mut self, now: Instant) {
        if let Some(copied) = &self.copied {
            if elapsed_since(copied.at, now) >= self.config.copy_feedback() {
                self.copied = None;
            }
        }

        if let Some(pending) = self.pending_resize {
            if elapsed_since(pending.at, now) >= self.config.resize_debounce() {
                self.pending_resize = None;
                self.apply_viewport(pending.viewport);
            }
        }

        if let Some(status) = &self.status {
            if elapsed_since(status.created_at, now) > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn on_resize(&mut self, width: u16, height: u16) {
        self.on_resize_at(width, height, Instant::now());
    }

    /// Later resizes replace earlier ones; only the last settles.
    pub(crate) fn on_resize_at(&mut self, width: u16, height: u16, now: Instant) {
        self.pending_resize = Some(PendingResize {
            viewport: grid_viewport(width, height),
            at: now,
        });
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.refit_grid();
        debug!(
            width = viewport.width,
            height = viewport.height,
            cols = self.geometry.cols,
            rows = self.geometry.rows,
            compact = self.geometry.compact,
            "grid resized"
        );
    }

    fn refit_grid(&mut self) {
        self.geometry = GridGeometry::fit(self.viewport, &TERMINAL_METRICS, self.palette.len());
        self.cursor = self.cursor.min(self.geometry.box_count.saturating_sub(1));
        self.keep_cursor_visible();
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn selected_color(&self) -> &ColorValue {
        self.palette.get(self.cursor)
    }

    fn total_rows(&self) -> usize {
        match self.geometry.cols {
            0 => 0,
            cols => self.geometry.box_count.div_ceil(cols),
        }
    }

    fn move_cursor(&mut self, d_col: isize, d_row: isize) {
        let cols = self.geometry.cols;
        if cols == 0 {
            return;
        }
        let row = (self.cursor / cols) as isize + d_row;
        let col = (self.cursor % cols) as isize + d_col;
        if row < 0 || col < 0 || col >= cols as isize {
            return;
        }
        let target = row as usize * cols + col as usize;
        if target < self.geometry.box_count {
            self.cursor = target;
            self.keep_cursor_visible();
        }
    }

    fn keep_cursor_visible(&mut self) {
        let (cols, rows) = (self.geometry.cols, self.geometry.rows);
        if cols == 0 || rows == 0 {
            self.scroll_row = 0;
            return;
        }
        let row = self.cursor / cols;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    fn open_selected(&mut self) {
        let color = self.selected_color().clone();
        self.open_detail(&color);
    }

    fn open_detail(&mut self, color: &ColorValue) {
        debug!(color = %color, steps = self.config.shade_steps(), "opening detail");
        self.detail = Some(ColorDetail::for_color(color, self.config.shade_steps()));
        self.detail_cursor = 0;
        self.input_mode = InputMode::Detail;
        self.set_status_info(STATUS_DETAIL);
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.detail_cursor = 0;
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    fn detail_entry_count(&self) -> usize {
        self.detail
            .as_ref()
            .map(|detail| detail.format_entries().len())
            .unwrap_or(0)
    }

    fn detail_next(&mut self) {
        let count = self.detail_entry_count();
        if count > 0 {
            self.detail_cursor = (self.detail_cursor + 1).min(count - 1);
        }
    }

    fn detail_prev(&mut self) {
        self.detail_cursor = self.detail_cursor.saturating_sub(1);
    }

    fn open_search(&mut self) {
        self.detail = None;
        self.input.clear();
        self.search_error = false;
        self.input_mode = InputMode::Search;
        self.set_status_info(STATUS_SEARCH);
    }

    /// Returns whether the typed text was a valid color.
    fn submit_search(&mut self) -> bool {
        match parser::parse_search_input(self.input.as_str()) {
            Ok(color) => {
                self.input.clear();
                self.search_error = false;
                self.open_detail(&color);
                true
            }
            Err(err) => {
                debug!(error = %err, "search rejected");
                self.search_error = true;
                false
            }
        }
    }

    fn copy_current(&mut self) {
        self.copy_current_at(Instant::now());
    }

    fn copy_current_at(&mut self, now: Instant) {
        let value = match self
            .detail
            .as_ref()
            .and_then(|detail| detail.format_entries().get(self.detail_cursor).copied())
        {
            Some(format) => format.value.clone(),
            None => return,
        };

        match self.clipboard.copy(&value) {
            Ok(()) => {
                debug!(value = %value, "copied to clipboard");
                self.set_status_info(format!("Copied {value}"));
                self.copied = Some(CopiedValue { value, at: now });
            }
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                self.set_status_error(format!("Copy failed: {err:#}"));
            }
        }
    }

    fn is_copied(&self, value: &str) -> bool {
        self.copied.as_ref().is_some_and(|c| c.value == value)
    }

    fn reshuffle(&mut self) {
        self.palette = Palette::generate(self.config.palette_size(), &mut rand::thread_rng());
        self.refit_grid();
        info!(colors = self.palette.len(), "generated new palette");
        self.set_status_info(STATUS_SHUFFLED);
    }

    fn set_shade_steps(&mut self, steps: u32) {
        self.config = self.config.clone().with_shade_steps(steps);
        if let Some(detail) = &self.detail {
            let color = detail.selected.clone();
            self.detail = Some(ColorDetail::for_color(&color, self.config.shade_steps()));
            self.detail_cursor = self.detail_cursor.min(self.detail_entry_count().saturating_sub(1));
        }
    }

    fn show_help_overlay(&mut self) {
        self.input_mode = InputMode::Help;
        self.set_status_info(STATUS_HELP);
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("ℹ️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("⚠️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }
}

fn grid_viewport(width: u16, height: u16) -> Viewport {
    Viewport {
        width,
        height: height.saturating_sub(CHROME_HEIGHT),
    }
}

fn elapsed_since(then: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(then)
}
