//! TUI (Terminal User Interface) module for the word finder
//!
//! This module provides the interactive filtering surface using Ratatui.
//!
//! # Architecture
//! - `FinderTui`: owns the terminal and a `FinderSession`, renders the
//!   constraint inputs and the match grid, and maps key events onto
//!   session mutations
//!
//! # Focus model
//! Focus cycles over the five position boxes, the include/exclude/search
//! fields, and the results grid. Typing edits the focused field and
//! triggers a synchronous re-filter; Enter on a result copies it to the
//! clipboard with a transient confirmation.

use crate::clipboard;
use crate::filter::WORD_LENGTH;
use crate::session::{FinderSession, TextField};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const COPIED_FLASH_MS: u64 = 1500;
const GRID_COLUMNS: usize = 5;
const FILTER_PANEL_WIDTH: u16 = 36;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const LABEL_STYLE: Style = Style::new().fg(Color::Gray);
const FOCUS_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Magenta);
const SLOT_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Focus {
    Position(usize),
    Include,
    Exclude,
    Search,
    Results,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Position(i) if i + 1 < WORD_LENGTH => Self::Position(i + 1),
            Self::Position(_) => Self::Include,
            Self::Include => Self::Exclude,
            Self::Exclude => Self::Search,
            Self::Search => Self::Results,
            Self::Results => Self::Position(0),
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Position(0) => Self::Results,
            Self::Position(i) => Self::Position(i - 1),
            Self::Include => Self::Position(WORD_LENGTH - 1),
            Self::Exclude => Self::Include,
            Self::Search => Self::Exclude,
            Self::Results => Self::Search,
        }
    }

    fn text_field(self) -> Option<TextField> {
        match self {
            Self::Include => Some(TextField::Include),
            Self::Exclude => Some(TextField::Exclude),
            Self::Search => Some(TextField::Search),
            Self::Position(_) | Self::Results => None,
        }
    }
}

/// Context for rendering the UI - groups related parameters to avoid too
/// many function arguments.
struct RenderContext<'a> {
    session: &'a FinderSession,
    focus: Focus,
    selected: usize,
    copied: Option<&'a str>,
    status: &'a str,
}

/// Main TUI component.
///
/// Manages terminal rendering, input handling, and the finder session.
pub struct FinderTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    session: FinderSession,
    focus: Focus,
    selected: usize,
    copied: Option<(String, Instant)>,
    status: String,
}

impl FinderTui {
    pub fn new(session: FinderSession) -> Result<Self, io::Error> {
        info_log!("FinderTui::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            session,
            focus: Focus::Position(0),
            selected: 0,
            copied: None,
            status: "Type letters into a position box to start filtering".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Event loop: redraw, poll, apply. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), io::Error> {
        loop {
            self.expire_copied_flash();
            self.clamp_selection();
            self.draw()?;
            if self.handle_input()? {
                return Ok(());
            }
        }
    }

    fn expire_copied_flash(&mut self) {
        if let Some((_, at)) = &self.copied
            && at.elapsed() >= Duration::from_millis(COPIED_FLASH_MS)
        {
            self.copied = None;
        }
    }

    // The visible window shrinks whenever a constraint changes
    fn clamp_selection(&mut self) {
        let visible_len = self.session.visible().len();
        if visible_len == 0 {
            self.selected = 0;
        } else if self.selected >= visible_len {
            self.selected = visible_len - 1;
        }
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            session: &self.session,
            focus: self.focus,
            selected: self.selected,
            copied: self.copied.as_ref().map(|(word, _)| word.as_str()),
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Filters + results
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Key help
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.session);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(FILTER_PANEL_WIDTH),
                Constraint::Min(20),
            ])
            .split(chunks[1]);

        Self::render_filters(f, body[0], ctx);
        Self::render_results(f, body[1], ctx);
        Self::render_status(f, chunks[2], ctx.status);
        Self::render_help(f, chunks[3], ctx.focus);
    }

    fn render_title(f: &mut Frame, area: Rect, session: &FinderSession) {
        let title = Paragraph::new(format!(
            "WORDPULSE - five-letter word finder ({} words)",
            session.corpus_size()
        ))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn position_boxes(session: &FinderSession, focus: Focus) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for i in 0..WORD_LENGTH {
            let letter = session.position(i).map_or(' ', |c| c.to_ascii_uppercase());
            let style = if focus == Focus::Position(i) {
                FOCUS_STYLE
            } else {
                SLOT_STYLE
            };
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn text_field_line(
        label: &str,
        session: &FinderSession,
        field: TextField,
        focus: Focus,
    ) -> Line<'static> {
        let focused = focus.text_field() == Some(field);
        let label_style = if focused { FOCUS_STYLE } else { LABEL_STYLE };
        let mut text = session.field_text(field).to_string();
        if focused {
            text.push('_');
        }
        Line::from(vec![
            Span::styled(format!(" {label}: "), label_style),
            Span::raw(text),
        ])
    }

    fn render_filters(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let source = if ctx.session.common_only() {
            "common words"
        } else {
            "all words"
        };

        let lines = vec![
            Line::from(Span::styled(" Letter positions", LABEL_STYLE)),
            Self::position_boxes(ctx.session, ctx.focus),
            Line::from(""),
            Self::text_field_line("Must include", ctx.session, TextField::Include, ctx.focus),
            Self::text_field_line("Must exclude", ctx.session, TextField::Exclude, ctx.focus),
            Self::text_field_line("Search", ctx.session, TextField::Search, ctx.focus),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Source: ", LABEL_STYLE),
                Span::styled(source, INFO_STYLE),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Filters").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_results(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let visible = ctx.session.visible();
        let total = ctx.session.match_count();
        let mut lines = Vec::new();

        if visible.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("  No matches found", LABEL_STYLE)));
        } else {
            for (row_index, row) in visible.chunks(GRID_COLUMNS).enumerate() {
                let mut spans = vec![Span::raw(" ")];
                for (col_index, word) in row.iter().enumerate() {
                    let index = row_index * GRID_COLUMNS + col_index;
                    let style = if ctx.focus == Focus::Results && index == ctx.selected {
                        SELECTED_STYLE
                    } else {
                        Style::new()
                    };
                    spans.push(Span::styled(format!(" {} ", word.to_uppercase()), style));
                    spans.push(Span::raw(" "));
                }
                lines.push(Line::from(spans));
            }

            lines.push(Line::from(""));
            if visible.len() < total {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  Showing top {} of {} - SPACE for more",
                        visible.len(),
                        total
                    ),
                    INFO_STYLE,
                )));
            } else {
                lines.push(Line::from(Span::styled("  All matches shown", LABEL_STYLE)));
            }
        }

        if let Some(word) = ctx.copied {
            lines.push(Line::from(Span::styled(
                format!("  Copied {} to clipboard", word.to_uppercase()),
                SUCCESS_STYLE,
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!("Matches ({total})"))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_help(f: &mut Frame, area: Rect, focus: Focus) {
        let text = match focus {
            Focus::Position(_) => {
                "Type a letter | BACKSPACE: Clear | TAB: Next field | Ctrl+T: Source | Ctrl+R: Reset | ESC: Quit"
            }
            Focus::Include | Focus::Exclude | Focus::Search => {
                "Type letters | BACKSPACE: Delete | TAB: Next field | Ctrl+T: Source | Ctrl+R: Reset | ESC: Quit"
            }
            Focus::Results => {
                "Arrows: Select | ENTER: Copy word | SPACE: Show more | TAB: Back to filters | ESC: Quit"
            }
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Poll for one event and apply it. Returns true when the user quits.
    fn handle_input(&mut self) -> Result<bool, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(false);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        // Filter out non-key events (mouse, focus, resize, paste)
        let Event::Key(key) = event else {
            return Ok(false);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(false);
        }

        // Filter out garbage characters from terminal escape sequences (alt-tab noise)
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring control character: {:?}", c);
            return Ok(false);
        }

        // Global bindings first
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_input() - ESC pressed, exiting");
                return Ok(true);
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Ok(false);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Ok(false);
            }
            KeyCode::Char('t' | 'T') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.toggle_common_only();
                self.status = format!(
                    "Source switched to {}",
                    if self.session.common_only() {
                        "common words"
                    } else {
                        "all words"
                    }
                );
                return Ok(false);
            }
            KeyCode::Char('r' | 'R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.reset_all();
                self.focus = Focus::Position(0);
                self.status = "Filters reset".to_string();
                return Ok(false);
            }
            _ => {}
        }

        match self.focus {
            Focus::Position(i) => self.handle_position_input(i, key),
            Focus::Include | Focus::Exclude | Focus::Search => self.handle_field_input(key),
            Focus::Results => self.handle_results_input(key),
        }
        Ok(false)
    }

    fn handle_position_input(&mut self, index: usize, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !Self::has_modifier_keys(&key) => {
                // Typing into a slot replaces its letter and moves to the next slot
                self.session.set_position(index, Some(c));
                if index + 1 < WORD_LENGTH {
                    self.focus = Focus::Position(index + 1);
                }
                self.status = format!("{} matches", self.session.match_count());
            }
            KeyCode::Backspace => {
                if self.session.position(index).is_some() {
                    self.session.set_position(index, None);
                } else if index > 0 {
                    self.session.set_position(index - 1, None);
                    self.focus = Focus::Position(index - 1);
                }
                self.status = format!("{} matches", self.session.match_count());
            }
            KeyCode::Delete => {
                self.session.set_position(index, None);
            }
            KeyCode::Left if index > 0 => {
                self.focus = Focus::Position(index - 1);
            }
            KeyCode::Right if index + 1 < WORD_LENGTH => {
                self.focus = Focus::Position(index + 1);
            }
            KeyCode::Down | KeyCode::Enter => {
                self.focus = Focus::Include;
            }
            _ => {
                debug_log!("handle_position_input() - Ignoring key: {:?}", key.code);
            }
        }
    }

    fn handle_field_input(&mut self, key: KeyEvent) {
        let Some(field) = self.focus.text_field() else {
            return;
        };

        match key.code {
            KeyCode::Char(c)
                if (c.is_ascii_alphabetic() || c == ',' || c == ' ')
                    && !Self::has_modifier_keys(&key) =>
            {
                self.session.push_field(field, c);
                self.status = format!("{} matches", self.session.match_count());
            }
            KeyCode::Backspace => {
                self.session.pop_field(field);
                self.status = format!("{} matches", self.session.match_count());
            }
            KeyCode::Up => {
                self.focus = self.focus.prev();
            }
            KeyCode::Down | KeyCode::Enter => {
                self.focus = self.focus.next();
            }
            _ => {
                debug_log!("handle_field_input() - Ignoring key: {:?}", key.code);
            }
        }
    }

    fn handle_results_input(&mut self, key: KeyEvent) {
        let visible_len = self.session.visible().len();
        match key.code {
            KeyCode::Left if self.selected > 0 => {
                self.selected -= 1;
            }
            KeyCode::Right if self.selected + 1 < visible_len => {
                self.selected += 1;
            }
            KeyCode::Up => {
                if self.selected >= GRID_COLUMNS {
                    self.selected -= GRID_COLUMNS;
                } else {
                    self.focus = Focus::Search;
                }
            }
            KeyCode::Down => {
                if self.selected + GRID_COLUMNS < visible_len {
                    self.selected += GRID_COLUMNS;
                } else if self.session.has_more() {
                    // Growing the window lets the selection keep moving down
                    self.session.show_more();
                }
            }
            KeyCode::Char(' ') => {
                if self.session.has_more() {
                    self.session.show_more();
                    self.status = format!(
                        "Showing {} of {} matches",
                        self.session.visible().len(),
                        self.session.match_count()
                    );
                }
            }
            KeyCode::Enter => {
                self.copy_selected();
            }
            _ => {
                debug_log!("handle_results_input() - Ignoring key: {:?}", key.code);
            }
        }
    }

    fn copy_selected(&mut self) {
        let Some(word) = self.session.visible().get(self.selected).cloned() else {
            return;
        };
        // Clipboard failure is a silent no-op; the flash only shows on success
        if clipboard::copy(&word) {
            info_log!("copy_selected() - Copied '{}'", word);
            self.status = format!("Copied {}", word.to_uppercase());
            self.copied = Some((word, Instant::now()));
        } else {
            debug_log!("copy_selected() - Clipboard write failed");
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl Drop for FinderTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
