use crate::completion::{CompletionSummary, MAX_STARS};
use crate::questions::TaskKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskProgress {
    pub completed: bool,
    pub stars: u8,
}

/// Per-task results for the current run of the app only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnerProgress {
    tasks: [TaskProgress; 3],
}

impl LearnerProgress {
    pub fn task(&self, kind: TaskKind) -> TaskProgress {
        self.tasks[kind.index()]
    }

    /// Keeps the best star count seen for the task.
    pub fn record(&mut self, summary: &CompletionSummary) {
        let entry = &mut self.tasks[summary.kind.index()];
        entry.completed = true;
        entry.stars = entry.stars.max(summary.stars.min(MAX_STARS));
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn total_stars(&self) -> u32 {
        self.tasks.iter().map(|t| u32::from(t.stars)).sum()
    }

    pub fn percent_complete(&self) -> u16 {
        (self.completed_count() * 100 / self.tasks.len()) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(kind: TaskKind, stars: u8) -> CompletionSummary {
        CompletionSummary {
            kind,
            score: 0,
            total: 3,
            stars,
            message: "",
        }
    }

    #[test]
    fn test_fresh_progress_is_empty() {
        let progress = LearnerProgress::default();
        assert_eq!(progress.completed_count(), 0);
        assert_eq!(progress.total_stars(), 0);
        assert_eq!(progress.percent_complete(), 0);
        assert!(!progress.task(TaskKind::SoundCount).completed);
    }

    #[test]
    fn test_record_keeps_best_stars() {
        let mut progress = LearnerProgress::default();
        progress.record(&summary(TaskKind::LetterOrder, 2));
        progress.record(&summary(TaskKind::LetterOrder, 1));
        assert_eq!(progress.task(TaskKind::LetterOrder).stars, 2);

        progress.record(&summary(TaskKind::LetterOrder, 3));
        progress.record(&summary(TaskKind::FindLetter, 3));
        assert_eq!(progress.completed_count(), 2);
        assert_eq!(progress.total_stars(), 6);
        assert_eq!(progress.percent_complete(), 66);
    }
}
