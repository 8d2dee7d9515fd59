use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tokio::sync::mpsc;
use uchim_alphabet::{
    AppState, Config, FeedbackOutcome, FeedbackScheduler, HomeAction, HomeState, LearnerProgress,
    QuizSession, TaskKind, draw_home, draw_quit_confirmation, draw_quiz, draw_summary,
    handle_home_input, handle_quit_confirm, handle_quiz_input, logger, validate_bank,
};

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(&config.log_file);
    logger::log("Starting Учим.ру");

    for kind in TaskKind::ALL {
        for error in validate_bank(&kind.questions()) {
            logger::log(&format!("{} bank: {}", kind.title(), error));
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        logger::log(&format!("Exited with error: {}", e));
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &Config) -> io::Result<()> {
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut scheduler = FeedbackScheduler::new(timer_tx);
    let mut events = EventStream::new();

    let mut app_state = AppState::Home;
    let mut home = HomeState::default();
    let mut progress = LearnerProgress::default();
    let mut quiz_session: Option<QuizSession> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Home => draw_home(f, &home, &progress),
            AppState::Quiz => {
                if let Some(session) = &quiz_session {
                    draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(summary) = quiz_session.as_ref().and_then(|s| s.summary.as_ref()) {
                    draw_summary(f, summary);
                }
            }
        })?;

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else {
                    break;
                };
                let Event::Key(key) = event? else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }

                match app_state {
                    AppState::Home => match handle_home_input(&mut home, key) {
                        HomeAction::StartTask(kind) => {
                            scheduler.cancel_all();
                            quiz_session = Some(QuizSession::new(kind, config.timing));
                            app_state = AppState::Quiz;
                        }
                        HomeAction::Quit => break,
                        HomeAction::None => {}
                    },
                    AppState::Quiz => {
                        if let Some(session) = quiz_session.as_mut()
                            && let Some(verdict) = handle_quiz_input(session, key, &mut app_state)
                        {
                            scheduler.schedule(&verdict);
                        }
                    }
                    AppState::QuizQuitConfirm => {
                        if handle_quit_confirm(key, &mut app_state) {
                            scheduler.cancel_all();
                            if let Some(session) = quiz_session.take() {
                                logger::log(&format!(
                                    "Session {} abandoned at question {}",
                                    session.id,
                                    session.current_index + 1
                                ));
                            }
                        } else if quiz_session.as_ref().is_some_and(|s| s.completed) {
                            // The last timer fired while the dialog was open.
                            app_state = AppState::Summary;
                        }
                    }
                    AppState::Summary => {
                        if matches!(
                            key.code,
                            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q')
                        ) {
                            quiz_session = None;
                            app_state = AppState::Home;
                        }
                    }
                }
            }
            Some(ticket) = timer_rx.recv() => {
                let Some(session) = quiz_session.as_mut() else {
                    logger::log("Feedback timer fired with no active session");
                    continue;
                };
                if session.on_feedback_elapsed(ticket) == FeedbackOutcome::Completed {
                    if let Some(summary) = &session.summary {
                        progress.record(summary);
                    }
                    if app_state == AppState::Quiz {
                        app_state = AppState::Summary;
                    }
                }
            }
        }
    }

    scheduler.cancel_all();
    logger::log("Shutting down");
    Ok(())
}
