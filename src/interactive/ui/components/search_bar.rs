use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_searching: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an externally-set query. The cursor only moves when the
    /// text actually changed, so redraws don't clobber mid-line edits.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.cursor_position = query.chars().count();
            self.query = query;
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Byte offset of the given char position, for in-place edits.
    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum()
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    /// Start of the word before the cursor, for Ctrl+W.
    fn prev_word_boundary(&self) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = self.cursor_position;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_byte = self.byte_index(self.cursor_position);
        let (before, after) = self.query.split_at(cursor_byte);
        let under_cursor = after.chars().next().unwrap_or(' ');

        let input_text = vec![
            Span::raw(before.to_string()),
            Span::styled(
                under_cursor.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ),
            Span::raw(after.chars().skip(1).collect::<String>()),
        ];

        let title = if self.is_searching {
            "Search - searching..."
        } else {
            "Search"
        };

        let input = Paragraph::new(Line::from(input_text))
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary();
                    self.delete_range(start, self.cursor_position)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(Message::SearchSubmitted),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::ALT) {
                    return None;
                }
                let byte_pos = self.byte_index(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                Some(Message::QueryChanged(self.query.clone()))
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.delete_range(self.cursor_position - 1, self.cursor_position)
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    self.delete_range(self.cursor_position, self.cursor_position + 1)
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
