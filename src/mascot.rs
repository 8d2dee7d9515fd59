//! Lines spoken by the fox helper next to the quiz.

use crate::questions::TaskKind;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug)]
pub struct MascotLines {
    pub greeting: &'static str,
    pub correct: &'static [&'static str],
    pub wrong: &'static [&'static str],
    /// Shown once the wrong-answer feedback clears.
    pub retry_hint: &'static str,
    /// Shown when the session advances to the next question.
    pub next: &'static str,
    pub finished: &'static [&'static str],
}

static LETTER_ORDER: MascotLines = MascotLines {
    greeting: "Привет! Я помогу тебе выучить алфавит! 🦊",
    correct: &[
        "Молодец! 🦊✨",
        "Отлично! 🦊💫",
        "Супер! 🦊🌟",
        "Умничка! 🦊⭐",
    ],
    wrong: &[
        "Попробуй ещё раз! 🦊",
        "Почти! Давай снова! 🦊",
        "Не сдавайся! 🦊",
    ],
    retry_hint: "Подумай, какая буква стоит между ними? 🦊",
    next: "Следующая буква! Ты справишься! 🦊",
    finished: &[
        "Ты справился! Я горжусь тобой! 🦊🎉",
        "Потрясающе! Ты знаешь алфавит! 🦊⭐",
    ],
};

static SOUND_COUNT: MascotLines = MascotLines {
    greeting: "Давай считать звуки и буквы! 🦊",
    correct: &[
        "Правильно! 🦊✨",
        "Ты отлично считаешь! 🦊💫",
        "Умница! 🦊🌟",
    ],
    wrong: &[
        "Подумай ещё! 🦊",
        "Попробуй посчитать заново! 🦊",
        "Считай внимательно! 🦊",
    ],
    retry_hint: "Считай буквы и звуки медленно! 🦊",
    next: "Следующее слово! Ты справишься! 🦊",
    finished: &[
        "Ура! Ты научился считать звуки! 🦊🎉",
        "Молодец! Теперь ты эксперт! 🦊⭐",
    ],
};

const FIND_LETTER_FINISHED: &[&str] = &["Отлично!"];

pub const HOME_GREETING_TITLE: &str = "Привет! Я Лиса!";
pub const HOME_GREETING: &str = "Я помогу тебе выучить русский язык! Давай начнём с заданий! 🌟";

/// The find-letter screen has no fox panel.
pub fn lines_for(kind: TaskKind) -> Option<&'static MascotLines> {
    match kind {
        TaskKind::FindLetter => None,
        TaskKind::LetterOrder => Some(&LETTER_ORDER),
        TaskKind::SoundCount => Some(&SOUND_COUNT),
    }
}

/// Pool the completion message is drawn from.
pub fn finished_pool(kind: TaskKind) -> &'static [&'static str] {
    lines_for(kind)
        .map(|lines| lines.finished)
        .unwrap_or(FIND_LETTER_FINISHED)
}

pub fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_letter_has_no_mascot() {
        assert!(lines_for(TaskKind::FindLetter).is_none());
        assert_eq!(finished_pool(TaskKind::FindLetter), &["Отлично!"]);
    }

    #[test]
    fn test_pick_stays_within_pool() {
        let mut rng = rand::thread_rng();
        let pool = finished_pool(TaskKind::LetterOrder);
        for _ in 0..50 {
            assert!(pool.contains(&pick(pool, &mut rng)));
        }
    }

    #[test]
    fn test_pick_from_empty_pool() {
        let mut rng = rand::thread_rng();
        assert_eq!(pick(&[], &mut rng), "");
    }
}
