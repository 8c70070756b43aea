use crate::interactive::application::hydration::Hydrator;
use crate::interactive::constants::{SEARCH_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::interactive::domain::models::{HydrationStatus, Mode};
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, add_tab::AddTab, result_list::ResultList, search_bar::SearchBar, tab_bar::TabBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

pub struct Renderer {
    tab_bar: TabBar,
    search_bar: SearchBar,
    result_list: ResultList,
    add_tab: AddTab,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            tab_bar: TabBar::new(),
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            add_tab: AddTab::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState, hydrator: &Hydrator) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
            ])
            .split(f.area());

        self.tab_bar.set_current(state.mode);
        self.tab_bar.render(f, chunks[0]);

        match state.mode {
            Mode::Search => self.render_search(f, chunks[1], state),
            Mode::Results => self.render_results(f, chunks[1], state, hydrator),
            Mode::Add => self.add_tab.render(f, chunks[1]),
        }
    }

    fn render_search(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_searching(state.search.is_searching);
        self.search_bar.render(f, chunks[0]);

        // Inline error channel: a failed search keeps the user here with
        // the message under the input, prior results untouched.
        let feedback = if let Some(error) = &state.search.error_message {
            Paragraph::new(error.clone()).style(Style::default().fg(Color::Red))
        } else {
            Paragraph::new("Enter: Search | Tab: Switch view")
                .style(Style::default().fg(Color::DarkGray))
        };
        f.render_widget(feedback, chunks[1]);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect, state: &AppState, hydrator: &Hydrator) {
        let entries = state
            .search
            .hashes
            .iter()
            .map(|hash| {
                let status = hydrator
                    .status(hash)
                    .cloned()
                    .unwrap_or(HydrationStatus::Pending);
                (hash.clone(), status)
            })
            .collect();

        self.result_list.set_entries(entries);
        self.result_list.set_query(state.search.query.clone());
        self.result_list.set_selected_index(state.search.selected_index);
        self.result_list.render(f, area);
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }
}
