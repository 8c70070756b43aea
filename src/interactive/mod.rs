//! Interactive client: terminal lifecycle, the event loop, and the
//! worker threads that run engine calls off the UI thread.

use anyhow::Result;
use crossbeam::channel::{Receiver, Sender, unbounded};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::{hydration::Hydrator, search_service::SearchService};
use self::constants::{EVENT_POLL_INTERVAL_MS, MAX_FETCH_WORKERS};
use self::domain::models::{FetchOutcome, FetchRequest, Mode, SearchOutcome, SearchRequest};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};
use crate::backend::TagBackend;

pub struct InteractiveApp {
    state: AppState,
    renderer: Renderer,
    hydrator: Hydrator,
    search_tx: Sender<SearchRequest>,
    search_rx: Receiver<SearchOutcome>,
    fetch_tx: Sender<FetchRequest>,
    fetch_rx: Receiver<FetchOutcome>,
}

impl InteractiveApp {
    pub fn new(backend: Arc<dyn TagBackend>) -> Self {
        let service = Arc::new(SearchService::new(backend));
        let (search_tx, search_rx) = start_search_worker(service.clone());
        let (fetch_tx, fetch_rx) = start_fetch_workers(service, fetch_worker_count());

        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            hydrator: Hydrator::new(),
            search_tx,
            search_rx,
            fetch_tx,
            fetch_rx,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state, &self.hydrator);
            })?;

            self.drain_workers();

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Pull every waiting worker outcome into the state. Search outcomes
    /// go through the update loop, which drops stale ids; fetch outcomes
    /// go to the hydrator, which drops stale epochs.
    fn drain_workers(&mut self) {
        while let Ok(outcome) = self.search_rx.try_recv() {
            self.apply(Message::from_search(outcome));
        }
        while let Ok(outcome) = self.fetch_rx.try_recv() {
            self.hydrator.apply(outcome);
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Tab bar navigation works from every view.
        match key.code {
            KeyCode::Tab => {
                let next = self.state.mode.next();
                self.apply(Message::SwitchTab(next));
                return false;
            }
            KeyCode::BackTab => {
                let previous = self.state.mode.previous();
                self.apply(Message::SwitchTab(previous));
                return false;
            }
            _ => {}
        }

        // Per-mode dispatch. Escape means "back" only while the results
        // view is active; the other views never see it.
        let message = match self.state.mode {
            Mode::Search => self.renderer.search_bar_mut().handle_key(key),
            Mode::Results => match key.code {
                KeyCode::Esc => Some(Message::NavigateBack),
                _ => self.renderer.result_list_mut().handle_key(key),
            },
            Mode::Add => None,
        };

        if let Some(msg) = message {
            self.apply(msg);
        }
        false
    }

    fn apply(&mut self, message: Message) {
        let command = self.state.update(message);
        self.run_command(command);
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => {
                let request = SearchRequest {
                    id: self.state.search.current_search_id,
                    query: self.state.search.query.clone(),
                };
                let _ = self.search_tx.send(request);
            }
            Command::StartHydration => {
                let requests = self.hydrator.begin(&self.state.search.hashes);
                for request in requests {
                    let _ = self.fetch_tx.send(request);
                }
            }
            Command::CancelHydration => {
                self.hydrator.invalidate();
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn hydrator(&self) -> &Hydrator {
        &self.hydrator
    }
}

fn fetch_worker_count() -> usize {
    num_cpus::get().clamp(2, MAX_FETCH_WORKERS)
}

fn start_search_worker(
    service: Arc<SearchService>,
) -> (Sender<SearchRequest>, Receiver<SearchOutcome>) {
    let (request_tx, request_rx) = unbounded::<SearchRequest>();
    let (outcome_tx, outcome_rx) = unbounded();

    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            let _ = outcome_tx.send(service.search(request));
        }
    });

    (request_tx, outcome_rx)
}

fn start_fetch_workers(
    service: Arc<SearchService>,
    workers: usize,
) -> (Sender<FetchRequest>, Receiver<FetchOutcome>) {
    let (request_tx, request_rx) = unbounded::<FetchRequest>();
    let (outcome_tx, outcome_rx) = unbounded();

    for _ in 0..workers {
        let request_rx = request_rx.clone();
        let outcome_tx = outcome_tx.clone();
        let service = service.clone();
        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let _ = outcome_tx.send(service.fetch(request));
            }
        });
    }

    (request_tx, outcome_rx)
}
