//! Keyboard handling. Routes keys to the confirmation modal, the search field
//! or the list depending on what is focused.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{App, ConfirmChoice, InputMode};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.is_confirming_delete() {
        handle_confirm_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Searching => handle_search_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
            app.confirm_choice = app.confirm_choice.toggle();
        }
        KeyCode::Enter => match app.confirm_choice {
            ConfirmChoice::Delete => app.confirm_delete(),
            ConfirmChoice::Cancel => app.cancel_delete(),
        },
        KeyCode::Char('y') | KeyCode::Char('d') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.stop_search(),
        KeyCode::Esc => {
            app.clear_search();
            app.stop_search();
        }
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_push(c);
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('x') => app.dismiss_notice(),
        _ if !app.panel.is_ready() => {}
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use usradmin_core::config::{CoreConfig, LatencyConfig};
    use usradmin_core::events::{CoreEvent, FetchReason};
    use usradmin_core::handshake::HandshakeState;
    use usradmin_core::session::SessionGate;
    use usradmin_core::store::InMemoryProfileStore;
    use usradmin_core::{CoreRuntime, UserProfile};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> (CoreRuntime, App) {
        let session = SessionGate::new();
        let store = Arc::new(InMemoryProfileStore::seeded(session.clone(), LatencyConfig::none()));
        let runtime = CoreRuntime::new(CoreConfig::default(), session, store, None);
        let mut app = App::new(runtime.handle(), false);
        app.handle_core_event(CoreEvent::Handshake(HandshakeState::Ready));
        app.handle_core_event(CoreEvent::ProfilesFetched {
            reason: FetchReason::Initial,
            result: Ok(vec![
                UserProfile::new("1", "alice@example.com"),
                UserProfile::new("2", "bob@example.com"),
                UserProfile::new("3", "carol@example.com"),
            ]),
        });
        (runtime, app)
    }

    #[tokio::test]
    async fn test_search_typing_filters_and_resets_selection() {
        let (_runtime, mut app) = loaded_app();
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Searching);
        for c in "CAR".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.panel.search_term(), "CAR");
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.visible_count(), 1);

        // 'q' is text while searching
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.panel.search_term(), "CAR");

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.panel.search_term(), "CAR");
    }

    #[tokio::test]
    async fn test_escape_clears_search() {
        let (_runtime, mut app) = loaded_app();
        handle_key(&mut app, key(KeyCode::Char('/')));
        handle_key(&mut app, key(KeyCode::Char('b')));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.panel.search_term(), "");
        assert_eq!(app.visible_count(), 3);
    }

    #[tokio::test]
    async fn test_selection_stays_in_bounds() {
        let (_runtime, mut app) = loaded_app();
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.selected_index, 0);
        for _ in 0..5 {
            handle_key(&mut app, key(KeyCode::Char('j')));
        }
        assert_eq!(app.selected_index, 2);
    }

    #[tokio::test]
    async fn test_cancel_leaves_list_untouched() {
        let (_runtime, mut app) = loaded_app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(
            app.panel.pending_deletion().map(|p| p.username.as_str()),
            Some("bob@example.com")
        );

        handle_key(&mut app, key(KeyCode::Char('n')));
        assert!(!app.is_confirming_delete());
        assert!(!app.panel.is_deleting());
        assert_eq!(app.panel.profiles().len(), 3);
    }

    #[tokio::test]
    async fn test_enter_on_default_choice_cancels() {
        let (_runtime, mut app) = loaded_app();
        handle_key(&mut app, key(KeyCode::Delete));
        assert_eq!(app.confirm_choice, ConfirmChoice::Cancel);

        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.is_confirming_delete());
        assert!(!app.panel.is_deleting());
    }

    #[tokio::test]
    async fn test_confirm_starts_deletion() {
        let (_runtime, mut app) = loaded_app();
        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.confirm_choice, ConfirmChoice::Delete);

        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.is_confirming_delete());
        assert!(app.panel.is_deleting());
    }

    // No tokio runtime here, so a dispatched fetch would panic
    #[test]
    fn test_list_keys_ignored_before_ready() {
        let session = SessionGate::new();
        let store = Arc::new(InMemoryProfileStore::seeded(session.clone(), LatencyConfig::none()));
        let runtime = CoreRuntime::new(CoreConfig::default(), session, store, None);
        let mut app = App::new(runtime.handle(), false);

        handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Normal);
        handle_key(&mut app, key(KeyCode::Char('r')));
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(!app.is_confirming_delete());

        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }
}
