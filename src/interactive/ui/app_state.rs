use crate::interactive::domain::models::Mode;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

pub struct AppState {
    pub mode: Mode,
    /// Mode that was active when the results view was entered; Escape
    /// returns there.
    results_return_mode: Mode,
    pub search: SearchState,
}

/// Shared search state. Only the message handlers below write to it;
/// every view reads it through the renderer.
pub struct SearchState {
    pub query: String,
    /// Hashes from the most recent successful search, in engine order.
    /// A failed or superseded search never overwrites this.
    pub hashes: Vec<String>,
    pub error_message: Option<String>,
    pub selected_index: usize,
    pub is_searching: bool,
    /// Id of the newest submission; outcomes tagged with anything older
    /// are stale and ignored.
    pub current_search_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            results_return_mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                hashes: Vec::new(),
                error_message: None,
                selected_index: 0,
                is_searching: false,
                current_search_id: 0,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                Command::None
            }
            Message::SearchSubmitted => {
                // Empty queries submit as-is; the engine decides.
                self.search.current_search_id += 1;
                self.search.is_searching = true;
                Command::ExecuteSearch
            }
            Message::SearchCompleted { id, hashes } => {
                if id != self.search.current_search_id {
                    return Command::None;
                }
                self.search.is_searching = false;
                self.search.hashes = hashes;
                self.search.error_message = None;
                self.search.selected_index = 0;
                self.enter_results()
            }
            Message::SearchFailed { id, message } => {
                if id != self.search.current_search_id {
                    return Command::None;
                }
                self.search.is_searching = false;
                self.search.error_message = Some(format!("Error: {message}"));
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.hashes.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::SwitchTab(mode) => self.transition_to(mode),
            Message::NavigateBack => {
                if self.mode == Mode::Results {
                    self.transition_to(self.results_return_mode)
                } else {
                    Command::None
                }
            }
        }
    }

    /// Move to `next`, starting or cancelling hydration as the results
    /// view is entered or left.
    fn transition_to(&mut self, next: Mode) -> Command {
        if next == self.mode {
            return Command::None;
        }

        let leaving_results = self.mode == Mode::Results;
        if next == Mode::Results {
            self.results_return_mode = self.mode;
        }
        self.mode = next;

        if leaving_results {
            Command::CancelHydration
        } else if next == Mode::Results {
            Command::StartHydration
        } else {
            Command::None
        }
    }

    /// A successful search always lands on the results view with a fresh
    /// hydration round, even when the view is already showing.
    fn enter_results(&mut self) -> Command {
        match self.transition_to(Mode::Results) {
            Command::None => Command::StartHydration,
            command => command,
        }
    }
}
