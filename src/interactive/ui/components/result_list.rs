use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::domain::models::HydrationStatus;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// One row per hash, rendered from whatever the hydrator knows so far.
/// Rows resolve independently and in any order; a failed row never
/// blocks its siblings.
#[derive(Default)]
pub struct ResultList {
    entries: Vec<(String, HydrationStatus)>,
    query: String,
    selected_index: usize,
    scroll_offset: usize,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entries(&mut self, entries: Vec<(String, HydrationStatus)>) {
        if entries.len() != self.entries.len() {
            self.scroll_offset = 0;
        }
        self.entries = entries;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(self.entries.len().saturating_sub(1));
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn move_selection(&mut self, new_index: usize) -> Option<Message> {
        let clamped = new_index.min(self.entries.len().saturating_sub(1));
        if self.entries.is_empty() || clamped == self.selected_index {
            None
        } else {
            Some(Message::SelectResult(clamped))
        }
    }

    fn entry_line(&self, index: usize) -> Line<'_> {
        let (hash, status) = &self.entries[index];
        let selected = index == self.selected_index;

        let marker = if selected { "▸ " } else { "  " };
        let mut spans = vec![Span::raw(marker)];

        match status {
            HydrationStatus::Pending => {
                spans.push(Span::styled(
                    format!("{} loading...", short_hash(hash)),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            HydrationStatus::Loaded(record) => {
                let name_style = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(record.file_name.clone(), name_style));
                spans.push(Span::styled(
                    format!("  {}", record.image_path),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            HydrationStatus::Failed(message) => {
                spans.push(Span::styled(
                    format!("✗ {} {message}", short_hash(hash)),
                    Style::default().fg(Color::Red),
                ));
            }
        }

        Line::from(spans)
    }
}

/// Hashes are long content digests; a prefix is enough to identify a
/// broken tile on screen.
fn short_hash(hash: &str) -> &str {
    let end = hash
        .char_indices()
        .nth(12)
        .map(|(i, _)| i)
        .unwrap_or(hash.len());
    &hash[..end]
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Rows
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let title = format!("Results: {} files for \"{}\"", self.entries.len(), self.query);
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        if self.entries.is_empty() {
            let empty = Paragraph::new(format!("No results for \"{}\"", self.query))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
        } else {
            let visible = inner.height as usize;
            if visible > 0 {
                // Keep the selection on screen.
                if self.selected_index < self.scroll_offset {
                    self.scroll_offset = self.selected_index;
                } else if self.selected_index >= self.scroll_offset + visible {
                    self.scroll_offset = self.selected_index + 1 - visible;
                }

                let lines: Vec<Line> = (self.scroll_offset
                    ..self.entries.len().min(self.scroll_offset + visible))
                    .map(|i| self.entry_line(i))
                    .collect();
                f.render_widget(Paragraph::new(lines), inner);
            }
        }

        let status_text = "↑/↓: Navigate | Tab: Switch view | Esc: Back";
        let status_bar = Paragraph::new(status_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(status_bar, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.move_selection(self.selected_index.saturating_sub(1)),
            KeyCode::Down => self.move_selection(self.selected_index + 1),
            KeyCode::PageUp => self.move_selection(self.selected_index.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => self.move_selection(self.selected_index + PAGE_SIZE),
            KeyCode::Home => self.move_selection(0),
            KeyCode::End => self.move_selection(self.entries.len().saturating_sub(1)),
            _ => None,
        }
    }
}
