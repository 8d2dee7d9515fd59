use crate::catalog::{self, ACHIEVEMENTS, PROFILE, STREAK_DAYS, SUBJECTS};
use crate::mascot::{HOME_GREETING, HOME_GREETING_TITLE};
use crate::models::{HomeState, Tab};
use crate::progress::LearnerProgress;
use crate::questions::TaskKind;
use crate::ui::layout::calculate_home_chunks;
use crate::utils::{help_line, star_row, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw_home(f: &mut Frame, state: &HomeState, progress: &LearnerProgress) {
    let layout = calculate_home_chunks(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            catalog::APP_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(catalog::APP_TAGLINE),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    match state.tab {
        Tab::Home => draw_tasks_tab(f, layout.body_area, state.selected_task, progress),
        Tab::Progress => draw_progress_tab(f, layout.body_area, progress),
        Tab::Achievements => draw_achievements_tab(f, layout.body_area),
        Tab::Profile => draw_profile_tab(f, layout.body_area, progress),
    }

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();
    let nav = Tabs::new(titles)
        .select(state.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(nav, layout.nav_area);

    let mut entries = vec![("1-4", "Вкладки")];
    if state.tab == Tab::Home {
        entries.push(("↑/↓", "Выбор"));
        entries.push(("Enter", "Начать"));
    }
    entries.push(("q", "Выход"));
    let help = Paragraph::new(help_line(&entries))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_tasks_tab(f: &mut Frame, area: Rect, selected: usize, progress: &LearnerProgress) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("🦊 {}", HOME_GREETING_TITLE),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(HOME_GREETING),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(greeting, chunks[0]);

    let items: Vec<ListItem> = TaskKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let task = progress.task(*kind);
            let done = if task.completed { " ✅" } else { "" };
            let text = format!(
                "{} {}  {}{}",
                kind.emoji(),
                kind.title(),
                star_row(task.stars),
                done
            );
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if task.completed {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let title = format!(
        "Твои задания {}/{}",
        progress.completed_count(),
        TaskKind::ALL.len()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, chunks[1]);
}

fn draw_progress_tab(f: &mut Frame, area: Rect, progress: &LearnerProgress) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let stats = Paragraph::new(vec![
        Line::from(format!("⭐ Звёзд собрано: {}", progress.total_stars())),
        Line::from(format!(
            "✅ Заданий выполнено: {}",
            progress.completed_count()
        )),
        Line::from(format!("🔥 Дней подряд: {}", STREAK_DAYS)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("📊 Твой прогресс"),
    );
    f.render_widget(stats, chunks[0]);

    let overall = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Задания"))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(progress.percent_complete());
    f.render_widget(overall, chunks[1]);

    let subject_block = Block::default()
        .borders(Borders::ALL)
        .title("Прогресс по предметам");
    let inner = subject_block.inner(chunks[2]);
    f.render_widget(subject_block, chunks[2]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(SUBJECTS.iter().map(|_| Constraint::Length(2)))
        .split(inner);
    for (subject, row) in SUBJECTS.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .label(format!("{} {}%", subject.title, subject.percent))
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(subject.percent);
        f.render_widget(gauge, *row);
    }
}

fn draw_achievements_tab(f: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            let (mark, style) = if achievement.unlocked {
                ("🔓", Style::default().fg(Color::Yellow))
            } else {
                ("🔒", Style::default().fg(Color::DarkGray))
            };
            let text = Text::from(vec![
                Line::from(format!(
                    "{} {} {}",
                    mark, achievement.emoji, achievement.title
                )),
                Line::from(format!(
                    "     {}",
                    truncate_string(achievement.description, width)
                )),
            ]);
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
        "🏆 Достижения {}/{}",
        catalog::unlocked_achievements(),
        ACHIEVEMENTS.len()
    )));
    f.render_widget(list, area);
}

fn draw_profile_tab(f: &mut Frame, area: Rect, progress: &LearnerProgress) {
    let mut text = Text::default();
    text.push_line(Line::from(PROFILE.avatar));
    text.push_line(Line::from(Span::styled(
        PROFILE.name,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(PROFILE.grade));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!(
        "🎯 Всего звёзд: {}",
        progress.total_stars()
    )));
    text.push_line(Line::from(format!(
        "🏅 Достижений: {}",
        catalog::unlocked_achievements()
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "⚙️ Настройки",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for entry in PROFILE.settings {
        text.push_line(Line::from(Span::styled(
            format!("  {}", entry),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let profile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Профиль"));
    f.render_widget(profile, area);
}
