use crate::completion::CompletionSummary;
use crate::config::FeedbackTiming;
use crate::questions::{Question, TaskKind};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Wrong,
}

/// Identifies one pending feedback transition of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket {
    pub session_id: u64,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub ticket: FeedbackTicket,
    pub hold: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Stale or duplicate timer; nothing changed.
    Ignored,
    Retry,
    Advanced,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Sounds,
    Letters,
}

#[derive(Debug)]
pub struct QuizSession {
    pub id: u64,
    pub kind: TaskKind,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: usize,
    pub feedback: Feedback,
    pub completed: bool,
    pub selected_option: usize,
    pub sounds_input: String,
    pub letters_input: String,
    pub focused_field: CountField,
    pub mascot_line: Option<&'static str>,
    pub summary: Option<CompletionSummary>,
    pub(crate) generation: u64,
    pub(crate) timing: FeedbackTiming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Progress,
    Achievements,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Progress, Tab::Achievements, Tab::Profile];

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Progress => 1,
            Tab::Achievements => 2,
            Tab::Profile => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Главная",
            Tab::Progress => "Прогресс",
            Tab::Achievements => "Награды",
            Tab::Profile => "Профиль",
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeState {
    pub tab: Tab,
    pub selected_task: usize,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            tab: Tab::Home,
            selected_task: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    StartTask(TaskKind),
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Home,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Home.next(), Tab::Progress);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Profile);
        assert_eq!(Tab::Achievements.previous(), Tab::Progress);
    }

    #[test]
    fn test_home_state_default() {
        let state = HomeState::default();
        assert_eq!(state.tab, Tab::Home);
        assert_eq!(state.selected_task, 0);
    }
}
