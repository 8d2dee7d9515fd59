use crate::completion::CompletionSummary;
use crate::config::FeedbackTiming;
use crate::logger;
use crate::mascot;
use crate::models::{
    AppState, CountField, Feedback, FeedbackOutcome, FeedbackTicket, QuizSession, Verdict,
};
use crate::questions::{Answer, Question, TaskKind};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

const MAX_COUNT_DIGITS: usize = 2;

pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Option<Verdict> {
    if key.code == KeyCode::Esc {
        *app_state = AppState::QuizQuitConfirm;
        return None;
    }

    // Controls are disabled while a verdict is on screen.
    if session.is_locked() {
        return None;
    }

    match session.kind {
        TaskKind::SoundCount => handle_count_input(session, key),
        TaskKind::FindLetter | TaskKind::LetterOrder => handle_option_input(session, key),
    }
}

fn handle_option_input(session: &mut QuizSession, key: KeyEvent) -> Option<Verdict> {
    let count = session
        .current_question()
        .map(Question::option_count)
        .unwrap_or(0);

    match key.code {
        KeyCode::Left | KeyCode::Up => {
            session.selected_option = session.selected_option.saturating_sub(1);
            None
        }
        KeyCode::Right | KeyCode::Down => {
            if session.selected_option + 1 < count {
                session.selected_option += 1;
            }
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => session.submit_selected(),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                let position = digit as usize;
                if (1..=count).contains(&position) {
                    return session.submit_option(position - 1);
                }
                return None;
            }

            let typed = c.to_uppercase().next().unwrap_or(c);
            let question = session.current_question()?;
            let index = (0..count).find(|&i| question.option_letter(i) == Some(typed))?;
            session.submit_option(index)
        }
        _ => None,
    }
}

fn handle_count_input(session: &mut QuizSession, key: KeyEvent) -> Option<Verdict> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            session.focused_field = match session.focused_field {
                CountField::Sounds => CountField::Letters,
                CountField::Letters => CountField::Sounds,
            };
            None
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let field = session.focused_input_mut();
            if field.len() < MAX_COUNT_DIGITS {
                field.push(c);
            }
            None
        }
        KeyCode::Backspace => {
            session.focused_input_mut().pop();
            None
        }
        KeyCode::Enter => session.submit_counts(),
        _ => None,
    }
}

/// Returns `true` when the learner confirmed leaving the quiz.
pub fn handle_quit_confirm(key: KeyEvent, app_state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            *app_state = AppState::Home;
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            *app_state = AppState::Quiz;
            false
        }
        _ => false,
    }
}

impl QuizSession {
    pub fn new(kind: TaskKind, timing: FeedbackTiming) -> Self {
        Self::with_questions(kind, kind.questions(), timing)
    }

    pub fn with_questions(kind: TaskKind, questions: Vec<Question>, timing: FeedbackTiming) -> Self {
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        logger::log(&format!(
            "Session {} started: {} ({} questions)",
            id,
            kind.title(),
            questions.len()
        ));

        let mut session = Self {
            id,
            kind,
            questions,
            current_index: 0,
            score: 0,
            feedback: Feedback::None,
            completed: false,
            selected_option: 0,
            sounds_input: String::new(),
            letters_input: String::new(),
            focused_field: CountField::Sounds,
            mascot_line: mascot::lines_for(kind).map(|lines| lines.greeting),
            summary: None,
            generation: 0,
            timing,
        };

        if session.questions.is_empty() {
            session.finish();
        }

        session
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// True while a verdict is showing or once the session is over.
    pub fn is_locked(&self) -> bool {
        self.feedback != Feedback::None || self.completed
    }

    pub fn ticket(&self) -> FeedbackTicket {
        FeedbackTicket {
            session_id: self.id,
            generation: self.generation,
        }
    }

    pub fn progress_percent(&self) -> u16 {
        let total = self.total();
        if total == 0 {
            return 100;
        }
        (((self.current_index + 1) * 100) / total).min(100) as u16
    }

    pub fn submit(&mut self, answer: Answer) -> Option<Verdict> {
        if self.is_locked() {
            logger::log(&format!(
                "Session {}: submission ignored while locked",
                self.id
            ));
            return None;
        }

        let correct = self.current_question()?.evaluate(&answer);
        self.generation += 1;
        if correct {
            self.feedback = Feedback::Correct;
            self.score += 1;
        } else {
            self.feedback = Feedback::Wrong;
        }

        if let Some(lines) = mascot::lines_for(self.kind) {
            let pool = if correct { lines.correct } else { lines.wrong };
            self.mascot_line = Some(mascot::pick(pool, &mut rand::thread_rng()));
        }

        logger::log(&format!(
            "Session {}: question {} answered {} (score {}/{})",
            self.id,
            self.current_index + 1,
            if correct { "correctly" } else { "wrongly" },
            self.score,
            self.total()
        ));

        Some(Verdict {
            correct,
            ticket: self.ticket(),
            hold: self.timing.hold_for(correct),
        })
    }

    pub fn submit_selected(&mut self) -> Option<Verdict> {
        let answer = self
            .current_question()?
            .answer_for_option(self.selected_option)?;
        self.submit(answer)
    }

    pub fn submit_option(&mut self, index: usize) -> Option<Verdict> {
        if self.is_locked() {
            return None;
        }
        let count = self.current_question()?.option_count();
        if index >= count {
            return None;
        }
        self.selected_option = index;
        self.submit_selected()
    }

    /// Both count fields as an answer, or `None` until both parse.
    pub fn parsed_counts(&self) -> Option<Answer> {
        let sounds = self.sounds_input.trim().parse::<u32>().ok()?;
        let letters = self.letters_input.trim().parse::<u32>().ok()?;
        Some(Answer::Counts { sounds, letters })
    }

    pub fn counts_ready(&self) -> bool {
        self.parsed_counts().is_some()
    }

    pub fn submit_counts(&mut self) -> Option<Verdict> {
        let answer = self.parsed_counts()?;
        self.submit(answer)
    }

    pub fn on_feedback_elapsed(&mut self, ticket: FeedbackTicket) -> FeedbackOutcome {
        if ticket != self.ticket() || self.feedback == Feedback::None {
            logger::log(&format!(
                "Session {}: ignored stale timer (session {}, generation {})",
                self.id, ticket.session_id, ticket.generation
            ));
            return FeedbackOutcome::Ignored;
        }

        let was_correct = self.feedback == Feedback::Correct;
        self.feedback = Feedback::None;

        if !was_correct {
            if let Some(lines) = mascot::lines_for(self.kind) {
                self.mascot_line = Some(lines.retry_hint);
            }
            return FeedbackOutcome::Retry;
        }

        self.reset_input();
        if self.current_index + 1 < self.total() {
            self.current_index += 1;
            if let Some(lines) = mascot::lines_for(self.kind) {
                self.mascot_line = Some(lines.next);
            }
            FeedbackOutcome::Advanced
        } else {
            self.finish();
            FeedbackOutcome::Completed
        }
    }

    fn finish(&mut self) {
        self.completed = true;
        let summary =
            CompletionSummary::new(self.kind, self.score, self.total(), &mut rand::thread_rng());
        if mascot::lines_for(self.kind).is_some() {
            self.mascot_line = Some(summary.message);
        }
        logger::log(&format!(
            "Session {} completed: {}/{} correct, {} stars",
            self.id, summary.score, summary.total, summary.stars
        ));
        self.summary = Some(summary);
    }

    fn reset_input(&mut self) {
        self.selected_option = 0;
        self.sounds_input.clear();
        self.letters_input.clear();
        self.focused_field = CountField::Sounds;
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focused_field {
            CountField::Sounds => &mut self.sounds_input,
            CountField::Letters => &mut self.letters_input,
        }
    }
}
