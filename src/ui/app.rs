use std::mem;

use anyhow::Error;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info, trace, warn};

use crate::library::LibraryStats;
use crate::location::{format_fragment, format_page, parse_route, resolve_location, Route};
use crate::models::{Book, Chapter, ScriptureLocation, Volume};
use crate::pages::PageStore;

use super::forms::{AddressForm, ADDRESS_PROMPT};
use super::helpers::{
    centered_rect, markdown_lines, surface_error, verse_lines, verse_range_label, wrapped_heights,
};
use super::screens::{ListCursor, PageScreen, Pane, Selection};

/// Rows reserved for the title and address line.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;
/// Lines drawn above the first verse (chapter heading plus a blank line).
const VERSE_HEADING_LINES: usize = 2;

/// What fills the body of the window.
enum Screen {
    Reader,
    Page(PageScreen),
}

/// Input modes layered over the current screen.
enum Mode {
    Normal,
    EnteringAddress(AddressForm),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
///
/// The scripture tree is owned here and never modified after construction;
/// every selection is a position into it.
pub struct App {
    volumes: Vec<Volume>,
    stats: LibraryStats,
    pages: PageStore,
    selection: Selection,
    volume_cursor: ListCursor,
    book_cursor: ListCursor,
    chapter_cursor: ListCursor,
    focus: Pane,
    highlighted: Vec<u32>,
    /// Row offset into the wrapped chapter text.
    verse_scroll: u16,
    /// Verse to bring to the top of the pane on the next draw.
    reveal_verse: Option<u32>,
    /// Inner area of the verses pane as last drawn; zero before the first draw.
    verse_view: Rect,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
    address: Option<String>,
}

impl App {
    pub fn new(volumes: Vec<Volume>, pages: PageStore) -> Self {
        let stats = LibraryStats::of(&volumes);
        Self {
            volumes,
            stats,
            pages,
            selection: Selection::default(),
            volume_cursor: ListCursor::default(),
            book_cursor: ListCursor::default(),
            chapter_cursor: ListCursor::default(),
            focus: Pane::Volumes,
            highlighted: Vec::new(),
            verse_scroll: 0,
            reveal_verse: None,
            verse_view: Rect::default(),
            screen: Screen::Reader,
            mode: Mode::Normal,
            status: None,
            address: None,
        }
    }

    /// The address line as last pushed.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn highlighted_verses(&self) -> &[u32] {
        &self.highlighted
    }

    pub fn current_volume(&self) -> Option<&Volume> {
        self.volumes.get(self.selection.volume?)
    }

    pub fn current_book(&self) -> Option<&Book> {
        self.current_volume()?.books.get(self.selection.book?)
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.current_book()?.chapters.get(self.selection.chapter?)
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub fn is_showing_page(&self) -> bool {
        matches!(self.screen, Screen::Page(_))
    }

    /// Route an address typed by the user or passed on the command line.
    ///
    /// Returns `false` when the address does not parse, does not resolve, or
    /// names a missing page. In that case only the status line changes.
    pub fn navigate(&mut self, fragment: &str) -> bool {
        match parse_route(fragment) {
            None => {
                debug!(fragment, "address did not parse");
                self.set_status(
                    format!("Not a scripture address: {fragment}"),
                    StatusKind::Error,
                );
                false
            }
            Some(Route::Page(slug)) => self.open_page(&slug),
            Some(Route::Scripture(location)) => self.open_location(&location, fragment),
        }
    }

    /// Handle one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal if self.is_showing_page() => self.handle_page_key(code, &mut exit),
            Mode::Normal => self.handle_reader_key(code, &mut exit),
            Mode::EnteringAddress(form) => self.handle_address_key(code, form),
        };

        exit
    }

    fn handle_reader_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Char('g') | KeyCode::Char(':') => return self.open_address_prompt(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-PAGE_STEP),
            KeyCode::PageDown => self.move_cursor(PAGE_STEP),
            KeyCode::Home => self.jump_cursor(false),
            KeyCode::End => self.jump_cursor(true),
            KeyCode::Enter | KeyCode::Right => self.activate_focused(),
            KeyCode::Left | KeyCode::Esc | KeyCode::Backspace => {
                self.focus = self.focus.previous();
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Char('[') => self.step_chapter(-1),
            KeyCode::Char(']') => self.step_chapter(1),
            _ => {}
        }
        Mode::Normal
    }

    fn handle_page_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Char('g') | KeyCode::Char(':') => return self.open_address_prompt(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.close_page(),
            _ => {
                if let Screen::Page(page) = &mut self.screen {
                    match code {
                        KeyCode::Up => page.scroll_by(-1),
                        KeyCode::Down => page.scroll_by(1),
                        KeyCode::PageUp => page.scroll_by(-(PAGE_STEP as i32)),
                        KeyCode::PageDown => page.scroll_by(PAGE_STEP as i32),
                        KeyCode::Home => page.scroll = 0,
                        KeyCode::End => page.scroll = page.max_scroll(),
                        _ => {}
                    }
                }
            }
        }
        Mode::Normal
    }

    fn handle_address_key(&mut self, code: KeyCode, mut form: AddressForm) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => {
                let address = form.address().to_string();
                if address.is_empty() {
                    form.error = Some("Type an address first.".to_string());
                } else if self.navigate(&address) {
                    return Mode::Normal;
                } else {
                    form.error = self.status_text().map(str::to_string);
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Delete => form.clear(),
            KeyCode::Char(ch) => {
                form.push_char(ch);
            }
            _ => {}
        }
        Mode::EnteringAddress(form)
    }

    fn open_address_prompt(&mut self) -> Mode {
        self.clear_status();
        Mode::EnteringAddress(AddressForm::with_text(
            self.address.as_deref().unwrap_or("#/"),
        ))
    }

    fn open_location(&mut self, location: &ScriptureLocation, fragment: &str) -> bool {
        let Some(found) = resolve_location(&self.volumes, location) else {
            info!(fragment, "address did not resolve");
            self.set_status(
                format!("No scripture found at {fragment}"),
                StatusKind::Error,
            );
            return false;
        };

        let path = found.path;
        let mut label = format!("{} {}", found.book.name, found.chapter.number);
        let verses = location.verse_numbers.clone().unwrap_or_default();
        if !verses.is_empty() {
            label.push(':');
            label.push_str(&verse_range_label(&verses));
        }

        self.selection = Selection::from(path);
        self.volume_cursor = ListCursor::at(path.volume);
        self.book_cursor = ListCursor::at(path.book);
        self.chapter_cursor = ListCursor::at(path.chapter);
        self.focus = Pane::Verses;
        self.screen = Screen::Reader;
        self.verse_scroll = 0;
        self.reveal_verse = verses.first().copied();
        self.highlighted = verses;
        self.sync_address();

        info!(fragment, location = %label, "navigated");
        self.set_status(format!("Opened {label}."), StatusKind::Info);
        true
    }

    fn open_page(&mut self, slug: &str) -> bool {
        match self.pages.load(slug) {
            Ok(page) => {
                info!(slug, "opened page");
                let title = page.title.clone();
                self.screen = Screen::Page(PageScreen::new(page));
                self.push_address(format_page(slug));
                self.set_status(format!("Opened {title}."), StatusKind::Info);
                true
            }
            Err(err) => {
                warn!(slug, error = %err, "page unavailable");
                let err = Error::from(err);
                self.set_status(surface_error(&err), StatusKind::Error);
                false
            }
        }
    }

    fn close_page(&mut self) {
        self.screen = Screen::Reader;
        self.clear_status();
        match self.reader_fragment() {
            Some(fragment) => {
                self.push_address(fragment);
            }
            None => self.address = None,
        }
    }

    fn activate_focused(&mut self) {
        match self.focus {
            Pane::Volumes => {
                if self.volumes.is_empty() {
                    self.set_status("No volumes loaded.", StatusKind::Error);
                    return;
                }
                self.clear_status();
                self.selection.select_volume(self.volume_cursor.selected);
                self.book_cursor = ListCursor::default();
                self.chapter_cursor = ListCursor::default();
                self.highlighted.clear();
                self.focus = Pane::Books;
            }
            Pane::Books => {
                if self.book_count() == 0 {
                    return;
                }
                self.clear_status();
                self.selection.select_book(self.book_cursor.selected);
                self.chapter_cursor = ListCursor::default();
                self.highlighted.clear();
                self.focus = Pane::Chapters;
            }
            Pane::Chapters => {
                if self.chapter_count() == 0 {
                    return;
                }
                self.clear_status();
                self.selection.select_chapter(self.chapter_cursor.selected);
                self.highlighted.clear();
                self.reset_verse_scroll();
                self.focus = Pane::Verses;
                self.sync_address();
            }
            Pane::Verses => {}
        }
    }

    fn move_cursor(&mut self, offset: isize) {
        match self.focus {
            Pane::Volumes => {
                let len = self.volumes.len();
                self.volume_cursor.move_selection(offset, len);
            }
            Pane::Books => {
                let len = self.book_count();
                self.book_cursor.move_selection(offset, len);
            }
            Pane::Chapters => {
                let len = self.chapter_count();
                self.chapter_cursor.move_selection(offset, len);
            }
            Pane::Verses => self.scroll_verses(offset),
        }
    }

    fn jump_cursor(&mut self, to_end: bool) {
        let (cursor, len) = match self.focus {
            Pane::Volumes => (&mut self.volume_cursor, self.volumes.len()),
            Pane::Books => {
                let len = self.book_count();
                (&mut self.book_cursor, len)
            }
            Pane::Chapters => {
                let len = self.chapter_count();
                (&mut self.chapter_cursor, len)
            }
            Pane::Verses => {
                let offset = if to_end { isize::MAX } else { isize::MIN };
                self.scroll_verses(offset);
                return;
            }
        };
        if to_end {
            cursor.select_last(len);
        } else {
            cursor.select_first();
        }
    }

    fn scroll_verses(&mut self, offset: isize) {
        let Some(lines) = self.chapter_lines() else {
            self.reset_verse_scroll();
            return;
        };
        self.settle_verse_scroll(&lines);
        let max = if self.verse_view.width == 0 {
            // Not drawn yet; the next draw clamps.
            u16::MAX
        } else {
            self.max_verse_scroll(&lines)
        };
        let next = (self.verse_scroll as isize)
            .saturating_add(offset)
            .clamp(0, max as isize);
        self.verse_scroll = u16::try_from(next).unwrap_or(u16::MAX);
    }

    fn reset_verse_scroll(&mut self) {
        self.verse_scroll = 0;
        self.reveal_verse = None;
    }

    /// Styled text of the selected chapter.
    fn chapter_lines(&self) -> Option<Vec<Line<'static>>> {
        let book = self.current_book()?;
        let chapter = self.current_chapter()?;
        Some(verse_lines(&book.name, chapter, &self.highlighted))
    }

    /// Apply a pending reveal once the pane width is known, then keep the
    /// offset inside the wrapped text.
    fn settle_verse_scroll(&mut self, lines: &[Line<'static>]) {
        if self.verse_view.width == 0 {
            return;
        }
        if let Some(verse) = self.reveal_verse.take() {
            self.verse_scroll = self.verse_offset(lines, verse);
        }
        self.verse_scroll = self.verse_scroll.min(self.max_verse_scroll(lines));
    }

    /// Wrapped row at which verse `number` starts.
    fn verse_offset(&self, lines: &[Line<'static>], number: u32) -> u16 {
        let index = (VERSE_HEADING_LINES + number.saturating_sub(1) as usize).min(lines.len());
        let rows: usize = wrapped_heights(&lines[..index], self.verse_view.width)
            .into_iter()
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Largest offset that still fills the pane.
    fn max_verse_scroll(&self, lines: &[Line<'static>]) -> u16 {
        let rows: usize = wrapped_heights(lines, self.verse_view.width)
            .into_iter()
            .sum();
        let max = rows.saturating_sub(usize::from(self.verse_view.height));
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    /// Move to the neighbouring chapter of the current book.
    fn step_chapter(&mut self, delta: isize) {
        let Some(current) = self.selection.chapter else {
            self.set_status("No chapter selected.", StatusKind::Error);
            return;
        };
        let target = current as isize + delta;
        if target < 0 || target >= self.chapter_count() as isize {
            let edge = if delta < 0 { "first" } else { "last" };
            self.set_status(format!("Already at the {edge} chapter."), StatusKind::Info);
            return;
        }

        let target = target as usize;
        self.clear_status();
        self.selection.select_chapter(target);
        self.chapter_cursor = ListCursor::at(target);
        self.highlighted.clear();
        self.reset_verse_scroll();
        self.sync_address();
    }

    fn book_count(&self) -> usize {
        self.current_volume().map_or(0, |volume| volume.books.len())
    }

    fn chapter_count(&self) -> usize {
        self.current_book().map_or(0, |book| book.chapters.len())
    }

    /// Canonical address of the selected chapter, including highlights.
    fn reader_fragment(&self) -> Option<String> {
        let path = self.selection.path()?;
        let volume = self.volumes.get(path.volume)?;
        let book = volume.books.get(path.book)?;
        let chapter = book.chapters.get(path.chapter)?;
        Some(format_fragment(
            &volume.name,
            &book.name,
            chapter.number,
            Some(self.highlighted.as_slice()),
        ))
    }

    fn sync_address(&mut self) {
        if let Some(fragment) = self.reader_fragment() {
            self.push_address(fragment);
        }
    }

    /// Replace the address unless it is already current.
    fn push_address(&mut self, fragment: String) -> bool {
        if self.address.as_deref() == Some(fragment.as_str()) {
            trace!(%fragment, "address unchanged");
            return false;
        }
        debug!(%fragment, "address changed");
        self.address = Some(fragment);
        true
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        match &self.screen {
            Screen::Reader => self.draw_reader(frame, chunks[1]),
            Screen::Page(page) => self.draw_page(frame, chunks[1], page),
        }
        self.draw_footer(frame, chunks[2]);

        if let Mode::EnteringAddress(form) = &self.mode {
            self.draw_address_prompt(frame, area, form);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let title = format!(
            "Scripture Reader  •  {} volumes  •  {} books  •  {} verses",
            self.stats.volumes, self.stats.books, self.stats.verses
        );
        let address = match &self.address {
            Some(address) => Span::styled(address.clone(), Style::default().fg(Color::Yellow)),
            None => Span::styled("(none)", Style::default().fg(Color::DarkGray)),
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Address: ", Style::default().add_modifier(Modifier::BOLD)),
            address,
        ]))
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(header, area);
    }

    fn draw_reader(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(18),
                Constraint::Percentage(22),
                Constraint::Percentage(10),
                Constraint::Percentage(50),
            ])
            .split(area);

        let volume_names: Vec<String> = self.volumes.iter().map(ToString::to_string).collect();
        self.draw_list(
            frame,
            columns[0],
            Pane::Volumes,
            volume_names,
            self.volume_cursor.selected,
            self.selection.volume,
            "No volumes loaded.",
        );

        let book_names: Vec<String> = self
            .current_volume()
            .map(|volume| volume.books.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        self.draw_list(
            frame,
            columns[1],
            Pane::Books,
            book_names,
            self.book_cursor.selected,
            self.selection.book,
            "Select a volume.",
        );

        let chapter_numbers: Vec<String> = self
            .current_book()
            .map(|book| {
                book.chapters
                    .iter()
                    .map(|chapter| chapter.number.to_string())
                    .collect()
            })
            .unwrap_or_default();
        self.draw_list(
            frame,
            columns[2],
            Pane::Chapters,
            chapter_numbers,
            self.chapter_cursor.selected,
            self.selection.chapter,
            "Select a book.",
        );

        self.draw_verses(frame, columns[3]);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        pane: Pane,
        labels: Vec<String>,
        cursor: usize,
        committed: Option<usize>,
        placeholder: &str,
    ) {
        let block = self.pane_block(pane);

        if labels.is_empty() {
            let message = Paragraph::new(placeholder.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = labels
            .into_iter()
            .enumerate()
            .map(|(idx, label)| {
                let style = if Some(idx) == committed {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(label, style)))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = if self.focus == pane {
            ListState::default().with_selected(Some(cursor))
        } else {
            ListState::default().with_selected(committed)
        };
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_verses(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.pane_block(Pane::Verses);
        self.verse_view = block.inner(area);
        let Some(lines) = self.chapter_lines() else {
            let message = Paragraph::new("Select a chapter, or press 'g' to go to an address.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(message, area);
            return;
        };

        self.settle_verse_scroll(&lines);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.verse_scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn pane_block(&self, pane: Pane) -> Block<'static> {
        let border_style = if self.focus == pane && !self.is_showing_page() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(pane.title())
    }

    fn draw_page(&self, frame: &mut Frame, area: Rect, screen: &PageScreen) {
        let paragraph = Paragraph::new(markdown_lines(&screen.page.body))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(screen.page.title.clone()),
            )
            .wrap(Wrap { trim: false })
            .scroll((screen.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::EnteringAddress(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Go   "),
                Span::styled("[Del]", key_style),
                Span::raw(" Clear   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Page(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[g]", key_style),
                Span::raw(" Go to   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Reader, _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Move   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[[ ]]", key_style),
                Span::raw(" Prev/Next Chapter   "),
                Span::styled("[g]", key_style),
                Span::raw(" Go to   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_address_prompt(&self, frame: &mut Frame, area: Rect, form: &AddressForm) {
        let popup_area = centered_rect(70, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Go to Address").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "e.g. #/new-testament/matthew/5/3-5,10  •  #/pages/about",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + ADDRESS_PROMPT.len() as u16 + form.value_len() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
