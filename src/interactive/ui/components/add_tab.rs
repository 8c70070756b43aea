use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Placeholder for the file import tab.
#[derive(Default)]
pub struct AddTab;

impl AddTab {
    pub fn new() -> Self {
        Self
    }
}

impl Component for AddTab {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let body = Paragraph::new("File import is not available yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().title("Add").borders(Borders::ALL));
        f.render_widget(body, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
