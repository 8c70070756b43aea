#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::SearchBar;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    #[test]
    fn test_typing_reports_query_changes() {
        let mut bar = SearchBar::new();

        let msg = bar.handle_key(key(KeyCode::Char('c')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "c"));
        let msg = bar.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "ca"));
        let msg = bar.handle_key(key(KeyCode::Char('t')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "cat"));
        assert_eq!(bar.query(), "cat");
    }

    #[test]
    fn test_enter_submits() {
        let mut bar = SearchBar::new();
        bar.set_query("cat".to_string());

        let msg = bar.handle_key(key(KeyCode::Enter));
        assert_eq!(msg, Some(Message::SearchSubmitted));
    }

    #[test]
    fn test_enter_submits_empty_query_too() {
        let mut bar = SearchBar::new();
        let msg = bar.handle_key(key(KeyCode::Enter));
        assert_eq!(msg, Some(Message::SearchSubmitted));
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut bar = SearchBar::new();
        assert!(bar.handle_key(key(KeyCode::Backspace)).is_none());

        bar.set_query("ab".to_string());
        let msg = bar.handle_key(key(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "a"));
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut bar = SearchBar::new();
        bar.set_query("ct".to_string());

        bar.handle_key(key(KeyCode::Left));
        let msg = bar.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "cat"));

        bar.handle_key(key(KeyCode::Home));
        let msg = bar.handle_key(key(KeyCode::Delete));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "at"));
    }

    #[test]
    fn test_unicode_editing_stays_on_char_boundaries() {
        let mut bar = SearchBar::new();
        for c in "日本語".chars() {
            bar.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(bar.query(), "日本語");

        let msg = bar.handle_key(key(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "日本"));
    }

    #[test]
    fn test_ctrl_u_clears_to_start() {
        let mut bar = SearchBar::new();
        bar.set_query("tag query".to_string());

        let msg = bar.handle_key(ctrl('u'));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q.is_empty()));
    }

    #[test]
    fn test_ctrl_w_deletes_last_word() {
        let mut bar = SearchBar::new();
        bar.set_query("big cat".to_string());

        let msg = bar.handle_key(ctrl('w'));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "big "));
    }
}
