mod home;
pub mod layout;
mod quiz;
mod summary;

pub use home::draw_home;
pub use layout::{calculate_home_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;
