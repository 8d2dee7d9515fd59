use std::fmt;

/// Placeholder token shown in place of the missing letter in a letter-order question.
pub const GAP: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    FindLetter,
    LetterOrder,
    SoundCount,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [
        TaskKind::FindLetter,
        TaskKind::LetterOrder,
        TaskKind::SoundCount,
    ];

    pub fn index(self) -> usize {
        match self {
            TaskKind::FindLetter => 0,
            TaskKind::LetterOrder => 1,
            TaskKind::SoundCount => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TaskKind::FindLetter => "Найди букву",
            TaskKind::LetterOrder => "Порядок букв",
            TaskKind::SoundCount => "Звуки и буквы",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            TaskKind::FindLetter => "🔍",
            TaskKind::LetterOrder => "🔤",
            TaskKind::SoundCount => "🔊",
        }
    }

    /// Heading shown above the prompt on the quiz screen.
    pub fn heading(self) -> &'static str {
        match self {
            TaskKind::FindLetter => "🔤 Найди букву",
            TaskKind::LetterOrder => "📝 Установи верный порядок букв",
            TaskKind::SoundCount => "🔊 Определи количество звуков и букв",
        }
    }

    /// Noun used in the "N из M" progress header.
    pub fn counter_label(self) -> &'static str {
        match self {
            TaskKind::SoundCount => "Слово",
            _ => "Вопрос",
        }
    }

    pub fn questions(self) -> Vec<Question> {
        match self {
            TaskKind::FindLetter => find_letter_bank(),
            TaskKind::LetterOrder => letter_order_bank(),
            TaskKind::SoundCount => sound_count_bank(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub letter: char,
    pub is_target: bool,
}

impl Candidate {
    pub const fn new(letter: char, is_target: bool) -> Self {
        Self { letter, is_target }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    FindLetter {
        target: char,
        candidates: Vec<Candidate>,
    },
    LetterOrder {
        sequence: [&'static str; 4],
        options: Vec<char>,
        correct: char,
    },
    SoundCount {
        word: &'static str,
        sounds: u32,
        letters: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Index of the clicked candidate in a find-letter question.
    Candidate(usize),
    Letter(char),
    Counts { sounds: u32, letters: u32 },
}

impl Question {
    pub fn kind(&self) -> TaskKind {
        match self {
            Question::FindLetter { .. } => TaskKind::FindLetter,
            Question::LetterOrder { .. } => TaskKind::LetterOrder,
            Question::SoundCount { .. } => TaskKind::SoundCount,
        }
    }

    /// Answers of the wrong shape for this variant are never correct.
    pub fn evaluate(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (Question::FindLetter { candidates, .. }, Answer::Candidate(index)) => candidates
                .get(*index)
                .map(|candidate| candidate.is_target)
                .unwrap_or(false),
            (Question::LetterOrder { correct, .. }, Answer::Letter(letter)) => letter == correct,
            (
                Question::SoundCount {
                    sounds, letters, ..
                },
                Answer::Counts {
                    sounds: given_sounds,
                    letters: given_letters,
                },
            ) => sounds == given_sounds && letters == given_letters,
            _ => false,
        }
    }

    /// Number of selectable options; sound-count questions take typed input instead.
    pub fn option_count(&self) -> usize {
        match self {
            Question::FindLetter { candidates, .. } => candidates.len(),
            Question::LetterOrder { options, .. } => options.len(),
            Question::SoundCount { .. } => 0,
        }
    }

    pub fn option_letter(&self, index: usize) -> Option<char> {
        match self {
            Question::FindLetter { candidates, .. } => candidates.get(index).map(|c| c.letter),
            Question::LetterOrder { options, .. } => options.get(index).copied(),
            Question::SoundCount { .. } => None,
        }
    }

    /// Builds the answer a click on option `index` stands for.
    pub fn answer_for_option(&self, index: usize) -> Option<Answer> {
        match self {
            Question::FindLetter { candidates, .. } if index < candidates.len() => {
                Some(Answer::Candidate(index))
            }
            Question::LetterOrder { options, .. } => options.get(index).copied().map(Answer::Letter),
            _ => None,
        }
    }

    /// Whether option `index` is the one a correct answer picks.
    pub fn is_correct_option(&self, index: usize) -> bool {
        self.answer_for_option(index)
            .map(|answer| self.evaluate(&answer))
            .unwrap_or(false)
    }
}

pub fn find_letter_bank() -> Vec<Question> {
    vec![
        Question::FindLetter {
            target: 'А',
            candidates: vec![
                Candidate::new('Б', false),
                Candidate::new('Ы', false),
                Candidate::new('К', false),
                Candidate::new('А', true),
            ],
        },
        Question::FindLetter {
            target: 'П',
            candidates: vec![
                Candidate::new('Е', false),
                Candidate::new('П', true),
                Candidate::new('Ф', false),
                Candidate::new('Ш', false),
            ],
        },
        Question::FindLetter {
            target: 'В',
            candidates: vec![
                Candidate::new('Х', false),
                Candidate::new('В', true),
                Candidate::new('Ч', false),
            ],
        },
    ]
}

pub fn letter_order_bank() -> Vec<Question> {
    vec![
        Question::LetterOrder {
            sequence: ["Ц", "Ч", GAP, "Щ"],
            options: vec!['Ш', 'Ы', 'Э'],
            correct: 'Ш',
        },
        Question::LetterOrder {
            sequence: ["С", "Т", GAP, "Ф"],
            options: vec!['У', 'Х', 'Ц'],
            correct: 'У',
        },
        Question::LetterOrder {
            sequence: ["Д", "Е", GAP, "Ж"],
            options: vec!['Ё', 'З', 'И'],
            correct: 'Ё',
        },
        Question::LetterOrder {
            sequence: ["М", "Н", GAP, "П"],
            options: vec!['О', 'Р', 'С'],
            correct: 'О',
        },
    ]
}

pub fn sound_count_bank() -> Vec<Question> {
    vec![
        Question::SoundCount {
            word: "Дуб",
            sounds: 3,
            letters: 3,
        },
        Question::SoundCount {
            word: "Ель",
            sounds: 3,
            letters: 3,
        },
        Question::SoundCount {
            word: "Стол",
            sounds: 4,
            letters: 4,
        },
    ]
}

/// Content mistakes caught when a bank is authored, never patched at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthoringError {
    EmptyBank,
    TargetCount { question: usize, found: usize },
    TargetMismatch { question: usize, letter: char },
    MissingGap { question: usize },
    OptionCount { question: usize, found: usize },
    CorrectNotOffered { question: usize, correct: char },
}

impl fmt::Display for AuthoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthoringError::EmptyBank => write!(f, "question bank is empty"),
            AuthoringError::TargetCount { question, found } => write!(
                f,
                "question {}: expected exactly one target candidate, found {}",
                question + 1,
                found
            ),
            AuthoringError::TargetMismatch { question, letter } => write!(
                f,
                "question {}: candidate '{}' is flagged as target but is not the target letter",
                question + 1,
                letter
            ),
            AuthoringError::MissingGap { question } => write!(
                f,
                "question {}: sequence must contain exactly one gap",
                question + 1
            ),
            AuthoringError::OptionCount { question, found } => write!(
                f,
                "question {}: expected 2 or 3 options, found {}",
                question + 1,
                found
            ),
            AuthoringError::CorrectNotOffered { question, correct } => write!(
                f,
                "question {}: correct letter '{}' is not among the options",
                question + 1,
                correct
            ),
        }
    }
}

impl std::error::Error for AuthoringError {}

pub fn validate_bank(questions: &[Question]) -> Vec<AuthoringError> {
    let mut errors = Vec::new();
    if questions.is_empty() {
        errors.push(AuthoringError::EmptyBank);
    }

    for (question, item) in questions.iter().enumerate() {
        match item {
            Question::FindLetter { target, candidates } => {
                let found = candidates.iter().filter(|c| c.is_target).count();
                if found != 1 {
                    errors.push(AuthoringError::TargetCount { question, found });
                }
                for candidate in candidates.iter().filter(|c| c.is_target) {
                    if candidate.letter != *target {
                        errors.push(AuthoringError::TargetMismatch {
                            question,
                            letter: candidate.letter,
                        });
                    }
                }
            }
            Question::LetterOrder {
                sequence,
                options,
                correct,
            } => {
                if sequence.iter().filter(|token| **token == GAP).count() != 1 {
                    errors.push(AuthoringError::MissingGap { question });
                }
                if !(2..=3).contains(&options.len()) {
                    errors.push(AuthoringError::OptionCount {
                        question,
                        found: options.len(),
                    });
                }
                if !options.contains(correct) {
                    errors.push(AuthoringError::CorrectNotOffered {
                        question,
                        correct: *correct,
                    });
                }
            }
            Question::SoundCount { .. } => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_banks_are_well_formed() {
        for kind in TaskKind::ALL {
            let bank = kind.questions();
            assert!(validate_bank(&bank).is_empty(), "{:?} bank has errors", kind);
            assert!(bank.iter().all(|q| q.kind() == kind));
        }
    }

    #[test]
    fn test_bank_sizes_and_order() {
        assert_eq!(TaskKind::FindLetter.questions().len(), 3);
        assert_eq!(TaskKind::LetterOrder.questions().len(), 4);
        assert_eq!(TaskKind::SoundCount.questions().len(), 3);

        match &TaskKind::LetterOrder.questions()[0] {
            Question::LetterOrder { sequence, correct, .. } => {
                assert_eq!(sequence, &["Ц", "Ч", GAP, "Щ"]);
                assert_eq!(*correct, 'Ш');
            }
            other => panic!("unexpected question {:?}", other),
        }
    }

    #[test]
    fn test_find_letter_evaluates_target_flag() {
        let question = &find_letter_bank()[0];
        assert!(question.evaluate(&Answer::Candidate(3)));
        assert!(!question.evaluate(&Answer::Candidate(0)));
        assert!(!question.evaluate(&Answer::Candidate(42)));
    }

    #[test]
    fn test_letter_order_evaluates_equality() {
        let question = &letter_order_bank()[2];
        assert!(question.evaluate(&Answer::Letter('Ё')));
        assert!(!question.evaluate(&Answer::Letter('Е')));
        assert!(!question.evaluate(&Answer::Letter('З')));
    }

    #[test]
    fn test_sound_count_requires_both_numbers() {
        let question = &sound_count_bank()[2];
        assert!(question.evaluate(&Answer::Counts {
            sounds: 4,
            letters: 4
        }));
        assert!(!question.evaluate(&Answer::Counts {
            sounds: 3,
            letters: 4
        }));
        assert!(!question.evaluate(&Answer::Counts {
            sounds: 4,
            letters: 5
        }));
    }

    #[test]
    fn test_mismatched_answer_shape_is_wrong() {
        let question = &sound_count_bank()[0];
        assert!(!question.evaluate(&Answer::Letter('Д')));
        assert!(!find_letter_bank()[0].evaluate(&Answer::Letter('А')));
    }

    #[test]
    fn test_option_helpers() {
        let question = &letter_order_bank()[1];
        assert_eq!(question.option_count(), 3);
        assert_eq!(question.option_letter(0), Some('У'));
        assert!(question.is_correct_option(0));
        assert!(!question.is_correct_option(1));
        assert_eq!(question.answer_for_option(5), None);

        let words = &sound_count_bank()[0];
        assert_eq!(words.option_count(), 0);
        assert_eq!(words.answer_for_option(0), None);
    }

    #[test]
    fn test_validate_reports_duplicate_targets() {
        let bank = vec![Question::FindLetter {
            target: 'А',
            candidates: vec![Candidate::new('А', true), Candidate::new('Б', true)],
        }];
        let errors = validate_bank(&bank);
        assert!(errors.contains(&AuthoringError::TargetCount {
            question: 0,
            found: 2
        }));
        assert!(errors.contains(&AuthoringError::TargetMismatch {
            question: 0,
            letter: 'Б'
        }));
    }

    #[test]
    fn test_validate_reports_letter_order_mistakes() {
        let bank = vec![Question::LetterOrder {
            sequence: ["А", "Б", "В", "Г"],
            options: vec!['Д'],
            correct: 'Е',
        }];
        let errors = validate_bank(&bank);
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[2].to_string(),
            "question 1: correct letter 'Е' is not among the options"
        );
    }

    #[test]
    fn test_validate_empty_bank() {
        assert_eq!(validate_bank(&[]), vec![AuthoringError::EmptyBank]);
    }
}
