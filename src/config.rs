use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "uchim_debug.log";
pub const DEFAULT_CORRECT_DELAY_MS: u64 = 1500;
pub const DEFAULT_WRONG_DELAY_MS: u64 = 1000;

pub const LOG_FILE_VAR: &str = "UCHIM_LOG_FILE";
pub const CORRECT_DELAY_VAR: &str = "UCHIM_CORRECT_DELAY_MS";
pub const WRONG_DELAY_VAR: &str = "UCHIM_WRONG_DELAY_MS";

/// How long a verdict stays on screen before the session moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTiming {
    pub correct: Duration,
    pub wrong: Duration,
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            correct: Duration::from_millis(DEFAULT_CORRECT_DELAY_MS),
            wrong: Duration::from_millis(DEFAULT_WRONG_DELAY_MS),
        }
    }
}

impl FeedbackTiming {
    pub fn hold_for(&self, correct: bool) -> Duration {
        if correct { self.correct } else { self.wrong }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub timing: FeedbackTiming,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            timing: FeedbackTiming::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(LOG_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }
        if let Some(ms) = lookup(CORRECT_DELAY_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timing.correct = Duration::from_millis(ms);
        }
        if let Some(ms) = lookup(WRONG_DELAY_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timing.wrong = Duration::from_millis(ms);
        }

        config
    }
}
