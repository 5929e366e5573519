use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::SwatchRole;
use crate::model::{ColorFormat, ColorValue};
use crate::tui::constants::{APP_VERSION, COPIED_LABEL, SEARCH_ERROR, SEARCH_HINT};
use crate::tui::helpers::{
    accent_title, build_help_lines, centered_rect, contrast_fg, inset_rect, swatch_color,
    BG_ACCENT, BG_BASE, BG_PANEL, FG_ACCENT,
};

use super::{App, InputMode, TERMINAL_METRICS};

const DRAWER_WIDTH: u16 = 46;

/// One copyable line in the detail drawer.
struct DetailRow<'a> {
    color: &'a ColorValue,
    format: &'a ColorFormat,
    role: Option<SwatchRole>,
    first_in_group: bool,
}

impl App {
    pub(crate) fn draw(&self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_body(f, chunks[1]);
        self.draw_footer(f, chunks[2]);

        match self.input_mode {
            InputMode::Detail => self.draw_detail_drawer(f, chunks[1]),
            InputMode::Search => self.draw_search_drawer(f, size),
            InputMode::Command => self.draw_command_overlay(f, size),
            InputMode::Help => self.draw_help_overlay(f, size),
            InputMode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let left_line = Line::from(vec![
            Span::styled(
                format!(" palette v{} 🎨 ", APP_VERSION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{} colors", self.palette.len())),
            Span::raw("  "),
            Span::styled(
                format!("{} shade steps", self.config.shade_steps()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled(
                format!("row {}/{}", self.scroll_row + 1, self.total_rows().max(1)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(
            Paragraph::new(left_line).style(Style::default().bg(BG_BASE)),
            cols[0],
        );

        let selected = self.selected_color();
        let right_line = Line::from(vec![
            Span::styled("  ", Style::default().bg(swatch_color(selected))),
            Span::raw(" "),
            Span::styled(
                selected.to_string(),
                Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        f.render_widget(
            Paragraph::new(right_line)
                .alignment(Alignment::Right)
                .style(Style::default().bg(BG_BASE)),
            cols[1],
        );
    }

    fn draw_body(&self, f: &mut Frame<'_>, area: Rect) {
        if self.geometry.compact {
            self.draw_grid(f, area);
            return;
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(TERMINAL_METRICS.sidebar_width),
                Constraint::Min(1),
            ])
            .split(area);
        self.draw_sidebar(f, cols[0]);
        self.draw_grid(f, cols[1]);
    }

    fn draw_sidebar(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = inset_rect(block.inner(area), 1);
        f.render_widget(block, area);

        let hint = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Cyan);
        let lines = vec![
            accent_title("Find a color"),
            Line::from(vec![Span::styled("/", key), Span::raw(" search by value")]),
            Line::from(Span::styled(SEARCH_HINT, hint)),
            Line::from(""),
            accent_title("Browse"),
            Line::from(vec![Span::styled("←↑↓→", key), Span::raw(" move")]),
            Line::from(vec![Span::styled("Enter", key), Span::raw(" details")]),
            Line::from(vec![Span::styled("r", key), Span::raw(" new palette")]),
            Line::from(vec![Span::styled(":", key), Span::raw(" commands")]),
            Line::from(vec![Span::styled("?", key), Span::raw(" help")]),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(BG_PANEL)),
            inner,
        );
    }

    fn draw_grid(&self, f: &mut Frame<'_>, area: Rect) {
        let geometry = self.geometry;
        if geometry.cols == 0 || geometry.rows == 0 {
            f.render_widget(
                Paragraph::new("Terminal too small").style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }

        let box_height = TERMINAL_METRICS.box_height;
        for row in 0..geometry.rows {
            for col in 0..geometry.cols {
                let index = (self.scroll_row + row) * geometry.cols + col;
                if index >= geometry.box_count {
                    return;
                }
                let cell = Rect {
                    x: area.x.saturating_add(col as u16 * geometry.box_width),
                    y: area.y.saturating_add(row as u16 * box_height),
                    width: geometry.box_width,
                    height: box_height,
                };
                let cell = cell.intersection(area);
                if cell.width == 0 || cell.height == 0 {
                    continue;
                }
                self.draw_swatch(f, cell, index);
            }
        }
    }

    fn draw_swatch(&self, f: &mut Frame<'_>, cell: Rect, index: usize) {
        let color = self.palette.get(index);
        let style = Style::default().bg(swatch_color(color));
        if index != self.cursor {
            f.render_widget(Block::default().style(style), cell);
            return;
        }

        let marker = Paragraph::new(vec![Line::from(""), Line::from("◆")])
            .alignment(Alignment::Center)
            .style(style.fg(contrast_fg(color)).add_modifier(Modifier::BOLD));
        f.render_widget(marker, cell);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.style())])
        } else {
            let help = match self.input_mode {
                InputMode::Normal => {
                    "arrows/hjkl move • Enter details • / search • : commands • r shuffle • ? help • q quit"
                }
                InputMode::Search => "Enter open • Esc cancel",
                InputMode::Detail => "↑/↓ choose • Enter/c copy • Esc close",
                InputMode::Command => {
                    "Up/Down navigate • Tab/Right complete • Enter select/run • Esc cancel"
                }
                InputMode::Help => "Enter/Esc to close ❔",
            };
            Line::from(vec![Span::styled(help, Style::default().fg(Color::DarkGray))])
        };
        f.render_widget(Paragraph::new(line), area);
    }

    fn detail_rows(&self) -> Vec<DetailRow<'_>> {
        let Some(detail) = self.detail.as_ref() else {
            return Vec::new();
        };

        let mut rows: Vec<DetailRow<'_>> = detail
            .formats
            .iter()
            .enumerate()
            .map(|(i, format)| DetailRow {
                color: &detail.selected,
                format,
                role: None,
                first_in_group: i == 0,
            })
            .collect();

        for swatch in &detail.swatches {
            rows.extend(swatch.formats.iter().enumerate().map(|(i, format)| DetailRow {
                color: &swatch.color,
                format,
                role: Some(swatch.role),
                first_in_group: i == 0,
            }));
        }
        rows
    }

    fn draw_detail_drawer(&self, f: &mut Frame<'_>, area: Rect) {
        let Some(detail) = self.detail.as_ref() else {
            return;
        };

        let width = if self.geometry.compact {
            area.width
        } else {
            min(DRAWER_WIDTH, area.width)
        };
        let drawer = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y,
            width,
            height: area.height,
        };
        f.render_widget(Clear, drawer);

        let block = Block::default()
            .borders(Borders::LEFT)
            .title(accent_title(" Color details"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(drawer);
        f.render_widget(block, drawer);
        if inner.width < 4 || inner.height < 5 {
            return;
        }

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(inner);

        let preview = Paragraph::new(vec![
            Line::from(""),
            Line::from(detail.selected.to_string()),
        ])
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(swatch_color(&detail.selected))
                .fg(contrast_fg(&detail.selected))
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(preview, sections[0]);

        let items: Vec<ListItem> = self
            .detail_rows()
            .into_iter()
            .map(|row| ListItem::new(self.detail_line(&row)))
            .collect();
        let list = List::new(items)
            .style(Style::default().bg(BG_PANEL))
            .highlight_style(Style::default().bg(BG_ACCENT).add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");
        let mut state = ListState::default();
        state.select(Some(self.detail_cursor));
        f.render_stateful_widget(list, sections[1], &mut state);
    }

    fn detail_line(&self, row: &DetailRow<'_>) -> Line<'static> {
        let chip = if row.first_in_group {
            Span::styled("  ", Style::default().bg(swatch_color(row.color)))
        } else {
            Span::raw("  ")
        };
        let marker = match (row.role, row.first_in_group) {
            (Some(SwatchRole::Selected), true) => "◆",
            (None, true) => "●",
            _ => " ",
        };
        let mut spans = vec![
            chip,
            Span::styled(format!("{marker} "), Style::default().fg(FG_ACCENT)),
            Span::styled(
                format!("{:<9}", row.format.label.as_str()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(row.format.value.clone()),
        ];
        if self.is_copied(&row.format.value) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                COPIED_LABEL,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }

    fn draw_search_drawer(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width.saturating_sub(10), 70).max(20);
        let popup_area = centered_rect(width, 6, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🔍 Search"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);
        if inner.height < 2 {
            return;
        }

        let feedback = if self.search_error {
            Line::from(Span::styled(SEARCH_ERROR, Style::default().fg(Color::Red)))
        } else {
            Line::from(Span::styled(
                format!("e.g. {SEARCH_HINT}"),
                Style::default().fg(Color::DarkGray),
            ))
        };
        let lines = vec![
            Line::from(vec![
                Span::styled("› ", Style::default().fg(FG_ACCENT)),
                Span::raw(self.input.as_str().to_owned()),
            ]),
            Line::from(""),
            feedback,
        ];
        let content = inner;
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .style(Style::default().bg(BG_PANEL)),
            content,
        );

        let caret = content.x + 2 + self.input.cursor_column() as u16;
        if caret < content.x + content.width {
            f.set_cursor(caret, content.y);
        }
    }

    fn draw_command_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width.saturating_sub(10), 80);
        let height = 5 + self.suggestions.len().min(6) as u16;
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(popup_area);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Command"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let input_area = input_block.inner(inner[0]);
        f.render_widget(input_block, inner[0]);
        f.render_widget(
            Paragraph::new(self.input.as_str().to_owned()).style(Style::default().bg(BG_PANEL)),
            input_area,
        );

        let mut lines: Vec<Line> = vec![Line::from(vec![Span::styled(
            "Suggestions",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )])];
        for (i, s) in self.suggestions.iter().enumerate() {
            let style = if i == self.suggestion_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(s.fill.as_str(), style.add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(s.label.as_str(), Style::default().fg(Color::DarkGray)),
            ]));
        }
        f.render_widget(Clear, inner[1]);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(BG_PANEL)),
            inner[1],
        );
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = build_help_lines();
        let width = min(area.width.saturating_sub(10), 80);
        let height = min(lines.len() as u16 + 4, area.height.saturating_sub(2)).max(10);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Keyboard Reference"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        let help_lines: Vec<Line> = lines
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(format!("{combo:<20}"), Style::default().fg(Color::Cyan)),
                    Span::raw(desc),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(help_lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }
}
