//! Fixed content of the home, progress, achievements and profile screens.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

pub const ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        title: "Первый шаг",
        emoji: "👟",
        description: "Выполнил первое задание",
        unlocked: true,
    },
    Achievement {
        title: "Звёздный ученик",
        emoji: "⭐",
        description: "Собрал 10 звёзд",
        unlocked: true,
    },
    Achievement {
        title: "Знаток русского",
        emoji: "📖",
        description: "Выполнил все задания по русскому языку",
        unlocked: false,
    },
    Achievement {
        title: "Неделька",
        emoji: "📅",
        description: "Занимался 7 дней подряд",
        unlocked: false,
    },
    Achievement {
        title: "Молния",
        emoji: "⚡",
        description: "Выполнил 5 заданий за день",
        unlocked: false,
    },
    Achievement {
        title: "Чемпион",
        emoji: "🏆",
        description: "Получил 50 звёзд",
        unlocked: false,
    },
];

pub fn unlocked_achievements() -> usize {
    ACHIEVEMENTS.iter().filter(|a| a.unlocked).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectProgress {
    pub title: &'static str,
    pub percent: u16,
}

pub const SUBJECTS: [SubjectProgress; 3] = [
    SubjectProgress {
        title: "✍️ Орфография",
        percent: 67,
    },
    SubjectProgress {
        title: "📝 Грамматика",
        percent: 45,
    },
    SubjectProgress {
        title: "📖 Чтение",
        percent: 83,
    },
];

pub const STREAK_DAYS: u32 = 5;

pub const APP_TITLE: &str = "🚀 Учим.ру";
pub const APP_TAGLINE: &str = "Учись играя!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub avatar: &'static str,
    pub name: &'static str,
    pub grade: &'static str,
    pub settings: [&'static str; 3],
}

pub const PROFILE: Profile = Profile {
    avatar: "👦",
    name: "Саша Петров",
    grade: "3 класс 📚",
    settings: ["Изменить профиль", "Уведомления", "Помощь"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_achievements_start_unlocked() {
        assert_eq!(ACHIEVEMENTS.len(), 6);
        assert_eq!(unlocked_achievements(), 2);
        assert!(ACHIEVEMENTS[0].unlocked && ACHIEVEMENTS[1].unlocked);
    }

    #[test]
    fn test_subject_percentages_in_range() {
        assert!(SUBJECTS.iter().all(|s| s.percent <= 100));
    }
}
