pub mod catalog;
pub mod completion;
pub mod config;
pub mod home;
pub mod logger;
pub mod mascot;
pub mod models;
pub mod progress;
pub mod questions;
pub mod scheduler;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use completion::{CompletionSummary, stars_for};
pub use config::{Config, FeedbackTiming};
pub use home::handle_home_input;
pub use models::{
    AppState, Feedback, FeedbackOutcome, FeedbackTicket, HomeAction, HomeState, QuizSession, Tab,
    Verdict,
};
pub use progress::LearnerProgress;
pub use questions::{Answer, Question, TaskKind, validate_bank};
pub use scheduler::FeedbackScheduler;
pub use session::{handle_quit_confirm, handle_quiz_input};
pub use ui::{draw_home, draw_quit_confirmation, draw_quiz, draw_summary};
