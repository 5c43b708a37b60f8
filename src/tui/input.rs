use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Submit,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') if ctrl => return Action::Submit,
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::F(2) => return Action::Submit,
        KeyCode::Esc => return Action::Quit,

        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => app.entry.insert_char(c),
        KeyCode::Enter => app.entry.newline(),
        KeyCode::Tab => app.entry.insert_str(&" ".repeat(TAB_WIDTH)),
        KeyCode::Backspace => app.entry.backspace(),
        KeyCode::Delete => app.entry.delete(),
        KeyCode::Left => app.entry.move_left(),
        KeyCode::Right => app.entry.move_right(),
        KeyCode::Up => app.entry.move_up(),
        KeyCode::Down => app.entry.move_down(),
        KeyCode::Home => app.entry.home(),
        KeyCode::End => app.entry.end(),
        _ => {}
    }
    Action::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImportSettings;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_builds_text() {
        let mut app = App::new(&ImportSettings::default());
        for c in "Buy".chars() {
            assert_eq!(handle_key(&mut app, key(KeyCode::Char(c))), Action::Continue);
        }
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('x')));
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.entry.text(), "Buy\n");
    }

    #[test]
    fn submit_and_quit_keys() {
        let mut app = App::new(&ImportSettings::default());
        assert_eq!(handle_key(&mut app, ctrl('s')), Action::Submit);
        assert_eq!(handle_key(&mut app, key(KeyCode::F(2))), Action::Submit);
        assert_eq!(handle_key(&mut app, key(KeyCode::Esc)), Action::Quit);
        assert_eq!(handle_key(&mut app, ctrl('c')), Action::Quit);
        assert!(app.entry.is_blank());
    }

    #[test]
    fn other_control_chords_are_ignored() {
        let mut app = App::new(&ImportSettings::default());
        handle_key(&mut app, ctrl('x'));
        assert_eq!(app.entry.text(), "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(&ImportSettings::default());
        let mut ev = key(KeyCode::Char('a'));
        ev.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut app, ev), Action::Continue);
        assert_eq!(app.entry.text(), "");
    }
}
