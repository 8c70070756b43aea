use crate::interactive::domain::models::Mode;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct TabBar {
    current: Option<Mode>,
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current(&mut self, mode: Mode) {
        self.current = Some(mode);
    }
}

impl Component for TabBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];

        for (i, mode) in Mode::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            if Some(*mode) == self.current {
                spans.push(Span::styled(
                    format!(" ▸ {} ", mode.title()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!("   {} ", mode.title()),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                ));
            }
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Tab switching is dispatched at the app level.
        None
    }
}
