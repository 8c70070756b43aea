#[cfg(test)]
mod tests {
    use crate::interactive::domain::models::Mode;
    use crate::interactive::ui::app_state::AppState;
    use crate::interactive::ui::commands::Command;
    use crate::interactive::ui::events::Message;

    fn hashes(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// Drive one full submission: submit, then deliver the completion
    /// for the id that submission was given.
    fn complete_search(state: &mut AppState, result: &[&str]) -> Command {
        let command = state.update(Message::SearchSubmitted);
        assert_eq!(command, Command::ExecuteSearch);
        state.update(Message::SearchCompleted {
            id: state.search.current_search_id,
            hashes: hashes(result),
        })
    }

    #[test]
    fn test_submission_bumps_id_and_requests_search() {
        let mut state = AppState::new();
        state.update(Message::QueryChanged("cat".to_string()));

        let command = state.update(Message::SearchSubmitted);
        assert_eq!(command, Command::ExecuteSearch);
        assert_eq!(state.search.current_search_id, 1);
        assert!(state.search.is_searching);
        assert_eq!(state.mode, Mode::Search);
    }

    #[test]
    fn test_empty_query_submits_as_is() {
        let mut state = AppState::new();
        assert_eq!(state.update(Message::SearchSubmitted), Command::ExecuteSearch);
        assert_eq!(state.search.query, "");
    }

    #[test]
    fn test_successful_search_enters_results_and_hydrates() {
        let mut state = AppState::new();
        state.update(Message::QueryChanged("cat".to_string()));

        let command = complete_search(&mut state, &["h1", "h2", "h3"]);
        assert_eq!(command, Command::StartHydration);
        assert_eq!(state.mode, Mode::Results);
        assert_eq!(state.search.hashes, hashes(&["h1", "h2", "h3"]));
        assert_eq!(state.search.error_message, None);
        assert!(!state.search.is_searching);
    }

    #[test]
    fn test_failed_search_keeps_hashes_and_view() {
        let mut state = AppState::new();
        complete_search(&mut state, &["h1", "h2"]);
        state.update(Message::SwitchTab(Mode::Search));

        state.update(Message::SearchSubmitted);
        let command = state.update(Message::SearchFailed {
            id: state.search.current_search_id,
            message: "timeout".to_string(),
        });

        assert_eq!(command, Command::None);
        assert_eq!(state.mode, Mode::Search);
        assert_eq!(state.search.hashes, hashes(&["h1", "h2"]));
        assert_eq!(
            state.search.error_message,
            Some("Error: timeout".to_string())
        );
        assert!(!state.search.is_searching);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = AppState::new();
        state.update(Message::SearchSubmitted);
        state.update(Message::SearchFailed {
            id: state.search.current_search_id,
            message: "timeout".to_string(),
        });
        assert!(state.search.error_message.is_some());

        complete_search(&mut state, &["h1"]);
        assert_eq!(state.search.error_message, None);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = AppState::new();

        // Submission "a", then submission "b" before "a" resolves.
        state.update(Message::QueryChanged("a".to_string()));
        state.update(Message::SearchSubmitted);
        let id_a = state.search.current_search_id;
        state.update(Message::QueryChanged("b".to_string()));
        state.update(Message::SearchSubmitted);
        let id_b = state.search.current_search_id;

        // "b" resolves first, then "a" straggles in.
        state.update(Message::SearchCompleted {
            id: id_b,
            hashes: hashes(&["b1"]),
        });
        let command = state.update(Message::SearchCompleted {
            id: id_a,
            hashes: hashes(&["a1"]),
        });

        assert_eq!(command, Command::None);
        assert_eq!(state.search.hashes, hashes(&["b1"]));
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut state = AppState::new();
        state.update(Message::SearchSubmitted);
        let id_a = state.search.current_search_id;
        state.update(Message::SearchSubmitted);

        state.update(Message::SearchCompleted {
            id: state.search.current_search_id,
            hashes: hashes(&["h1"]),
        });
        let command = state.update(Message::SearchFailed {
            id: id_a,
            message: "timeout".to_string(),
        });

        assert_eq!(command, Command::None);
        assert_eq!(state.search.error_message, None);
        assert_eq!(state.search.hashes, hashes(&["h1"]));
    }

    #[test]
    fn test_escape_returns_to_the_mode_results_was_entered_from() {
        let mut state = AppState::new();
        complete_search(&mut state, &["h1"]);
        assert_eq!(state.mode, Mode::Results);

        let command = state.update(Message::NavigateBack);
        assert_eq!(command, Command::CancelHydration);
        assert_eq!(state.mode, Mode::Search);
    }

    #[test]
    fn test_escape_outside_results_does_nothing() {
        let mut state = AppState::new();
        assert_eq!(state.update(Message::NavigateBack), Command::None);
        assert_eq!(state.mode, Mode::Search);

        state.update(Message::SwitchTab(Mode::Add));
        assert_eq!(state.update(Message::NavigateBack), Command::None);
        assert_eq!(state.mode, Mode::Add);
    }

    #[test]
    fn test_escape_after_entering_results_from_add_returns_to_add() {
        let mut state = AppState::new();
        state.update(Message::SwitchTab(Mode::Add));
        let command = state.update(Message::SwitchTab(Mode::Results));
        assert_eq!(command, Command::StartHydration);

        state.update(Message::NavigateBack);
        assert_eq!(state.mode, Mode::Add);
    }

    #[test]
    fn test_tab_switch_away_from_results_cancels_hydration() {
        let mut state = AppState::new();
        complete_search(&mut state, &["h1"]);

        let command = state.update(Message::SwitchTab(Mode::Add));
        assert_eq!(command, Command::CancelHydration);
        assert_eq!(state.mode, Mode::Add);
    }

    #[test]
    fn test_reentering_results_by_tab_rehydrates() {
        let mut state = AppState::new();
        complete_search(&mut state, &["h1"]);
        state.update(Message::SwitchTab(Mode::Search));

        let command = state.update(Message::SwitchTab(Mode::Results));
        assert_eq!(command, Command::StartHydration);
    }

    #[test]
    fn test_search_while_on_results_starts_a_fresh_round() {
        let mut state = AppState::new();
        complete_search(&mut state, &["h1"]);

        // A second search completing while the results view is showing
        // still needs a hydration round for the new list.
        let command = complete_search(&mut state, &["h2"]);
        assert_eq!(command, Command::StartHydration);
        assert_eq!(state.search.hashes, hashes(&["h2"]));
    }

    #[test]
    fn test_selection_is_bounded_by_result_count() {
        let mut state = AppState::new();
        complete_search(&mut state, &["h1", "h2"]);

        state.update(Message::SelectResult(1));
        assert_eq!(state.search.selected_index, 1);

        state.update(Message::SelectResult(9));
        assert_eq!(state.search.selected_index, 1);
    }
}
