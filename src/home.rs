use crate::models::{HomeAction, HomeState, Tab};
use crate::questions::TaskKind;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_home_input(state: &mut HomeState, key: KeyEvent) -> HomeAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => HomeAction::Quit,
        KeyCode::Char('1') => select_tab(state, Tab::Home),
        KeyCode::Char('2') => select_tab(state, Tab::Progress),
        KeyCode::Char('3') => select_tab(state, Tab::Achievements),
        KeyCode::Char('4') => select_tab(state, Tab::Profile),
        KeyCode::Right | KeyCode::Tab => select_tab(state, state.tab.next()),
        KeyCode::Left | KeyCode::BackTab => select_tab(state, state.tab.previous()),
        KeyCode::Up if state.tab == Tab::Home => {
            state.selected_task = state.selected_task.saturating_sub(1);
            HomeAction::None
        }
        KeyCode::Down if state.tab == Tab::Home => {
            if state.selected_task < TaskKind::ALL.len().saturating_sub(1) {
                state.selected_task += 1;
            }
            HomeAction::None
        }
        KeyCode::Enter if state.tab == Tab::Home => TaskKind::ALL
            .get(state.selected_task)
            .copied()
            .map(HomeAction::StartTask)
            .unwrap_or(HomeAction::None),
        _ => HomeAction::None,
    }
}

fn select_tab(state: &mut HomeState, tab: Tab) -> HomeAction {
    state.tab = tab;
    HomeAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(state: &mut HomeState, code: KeyCode) -> HomeAction {
        handle_home_input(state, KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_task_navigation_clamps_at_bounds() {
        let mut state = HomeState::default();
        press(&mut state, KeyCode::Up);
        assert_eq!(state.selected_task, 0);
        for _ in 0..10 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.selected_task, 2);
    }

    #[test]
    fn test_enter_starts_selected_task() {
        let mut state = HomeState::default();
        press(&mut state, KeyCode::Down);
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            HomeAction::StartTask(TaskKind::LetterOrder)
        );
    }

    #[test]
    fn test_tabs_switch_and_ignore_task_keys() {
        let mut state = HomeState::default();
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.tab, Tab::Achievements);

        assert_eq!(press(&mut state, KeyCode::Enter), HomeAction::None);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected_task, 0);

        press(&mut state, KeyCode::Right);
        assert_eq!(state.tab, Tab::Profile);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.tab, Tab::Home);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = HomeState::default();
        assert_eq!(press(&mut state, KeyCode::Char('q')), HomeAction::Quit);
        assert_eq!(press(&mut state, KeyCode::Esc), HomeAction::Quit);
    }
}
