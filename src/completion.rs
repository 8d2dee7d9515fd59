use crate::mascot;
use crate::questions::TaskKind;
use rand::Rng;

pub const MAX_STARS: u8 = 3;

/// Star rating shared by every task: all correct earns 3, one miss earns 2,
/// anything else (including zero) earns 1.
pub fn stars_for(score: usize, total: usize) -> u8 {
    if score == total {
        3
    } else if score + 1 >= total {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSummary {
    pub kind: TaskKind,
    pub score: usize,
    pub total: usize,
    pub stars: u8,
    pub message: &'static str,
}

impl CompletionSummary {
    pub fn new<R: Rng + ?Sized>(kind: TaskKind, score: usize, total: usize, rng: &mut R) -> Self {
        Self {
            kind,
            score,
            total,
            stars: stars_for(score, total),
            message: mascot::pick(mascot::finished_pool(kind), rng),
        }
    }

    pub fn result_line(&self) -> String {
        match self.kind {
            TaskKind::FindLetter => {
                format!("Ты нашёл {} из {} букв!", self.score, self.total)
            }
            _ => format!("Правильных ответов: {} из {}", self.score, self.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_thresholds_for_three_questions() {
        assert_eq!(stars_for(3, 3), 3);
        assert_eq!(stars_for(2, 3), 2);
        assert_eq!(stars_for(1, 3), 1);
        assert_eq!(stars_for(0, 3), 1);
    }

    #[test]
    fn test_stars_thresholds_for_four_questions() {
        assert_eq!(stars_for(4, 4), 3);
        assert_eq!(stars_for(3, 4), 2);
        assert_eq!(stars_for(2, 4), 1);
    }

    #[test]
    fn test_stars_for_single_question_session() {
        assert_eq!(stars_for(1, 1), 3);
        assert_eq!(stars_for(0, 1), 2);
    }

    #[test]
    fn test_summary_is_idempotent_on_stars() {
        let mut rng = rand::thread_rng();
        let first = CompletionSummary::new(TaskKind::SoundCount, 2, 3, &mut rng);
        for _ in 0..20 {
            let again = CompletionSummary::new(TaskKind::SoundCount, 2, 3, &mut rng);
            assert_eq!(again.stars, first.stars);
            assert!(mascot::finished_pool(TaskKind::SoundCount).contains(&again.message));
        }
    }

    #[test]
    fn test_result_line_wording() {
        let mut rng = rand::thread_rng();
        let found = CompletionSummary::new(TaskKind::FindLetter, 3, 3, &mut rng);
        assert_eq!(found.result_line(), "Ты нашёл 3 из 3 букв!");
        assert_eq!(found.message, "Отлично!");

        let ordered = CompletionSummary::new(TaskKind::LetterOrder, 1, 4, &mut rng);
        assert_eq!(ordered.result_line(), "Правильных ответов: 1 из 4");
        assert_eq!(ordered.stars, 1);
    }
}
