use crate::models::{CountField, Feedback, QuizSession};
use crate::questions::{GAP, Question};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{help_line, pad_center};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const TILE_WIDTH: usize = 5;

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let Some(question) = session.current_question() else {
        return;
    };
    let layout = calculate_quiz_chunks(f.area(), session.mascot_line.is_some());

    let header_text = format!(
        "{} {} из {}    Счёт: {}⭐",
        session.kind.counter_label(),
        session.current_index + 1,
        session.total(),
        session.score
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(session.progress_percent());
    f.render_widget(gauge, layout.gauge_area);

    if let Some(line) = session.mascot_line {
        let mascot = Paragraph::new(format!("🦊  {}", line))
            .style(Style::default().fg(Color::LightRed))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(mascot, layout.mascot_area);
    }

    let mut prompt = Text::default();
    prompt.push_line(Line::from(Span::styled(
        session.kind.heading(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    prompt.push_line(Line::from(""));
    prompt.push_line(prompt_line(question));
    let prompt = Paragraph::new(prompt)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(prompt, layout.question_area);

    match question {
        Question::SoundCount { .. } => draw_count_inputs(f, layout.answer_area, session),
        _ => draw_options(f, layout.answer_area, session, question),
    }

    let entries: Vec<(&str, &str)> = match question {
        Question::SoundCount { .. } => vec![
            ("0-9", "Число"),
            ("Tab", "Поле"),
            ("Enter", "Проверить ответ"),
            ("Esc", "Выйти"),
        ],
        _ => vec![
            ("←/→", "Выбор"),
            ("Enter", "Ответить"),
            ("1-4", "Быстрый ответ"),
            ("Esc", "Выйти"),
        ],
    };
    let help = Paragraph::new(help_line(&entries))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn prompt_line(question: &Question) -> Line<'static> {
    let accent = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    match question {
        Question::FindLetter { target, .. } => Line::from(vec![
            Span::from("Найди букву  "),
            Span::styled(format!("[ {} ]", target), accent),
        ]),
        Question::LetterOrder { sequence, .. } => {
            let spans: Vec<Span> = sequence
                .iter()
                .map(|token| {
                    let style = if *token == GAP {
                        Style::default().fg(Color::Yellow)
                    } else {
                        accent
                    };
                    Span::styled(format!("[{}]", pad_center(token, TILE_WIDTH)), style)
                })
                .collect();
            Line::from(spans)
        }
        Question::SoundCount { word, .. } => Line::from(Span::styled(word.to_string(), accent)),
    }
}

fn option_style(session: &QuizSession, question: &Question, index: usize) -> Style {
    let is_correct = question.is_correct_option(index);
    let selected = index == session.selected_option;
    match session.feedback {
        Feedback::Correct if is_correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Feedback::Wrong if selected && !is_correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Feedback::None if selected => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        _ => Style::default(),
    }
}

fn draw_options(f: &mut Frame, area: Rect, session: &QuizSession, question: &Question) {
    let mut spans = Vec::new();
    for index in 0..question.option_count() {
        let letter = question
            .option_letter(index)
            .map(String::from)
            .unwrap_or_default();
        spans.push(Span::styled(
            format!("[{}]", pad_center(&letter, TILE_WIDTH)),
            option_style(session, question, index),
        ));
        spans.push(Span::from("  "));
    }

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(spans));
    let numbers: String = (1..=question.option_count())
        .map(|n| pad_center(&n.to_string(), TILE_WIDTH + 2) + "  ")
        .collect();
    text.push_line(Line::from(Span::styled(
        numbers,
        Style::default().fg(Color::DarkGray),
    )));
    push_feedback(&mut text, session.feedback);

    let options = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Варианты"));
    f.render_widget(options, area);
}

fn draw_count_inputs(f: &mut Frame, area: Rect, session: &QuizSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(2),
        ])
        .split(area);

    let fields = [
        (
            CountField::Sounds,
            "🔊 Количество звуков",
            "зв.",
            &session.sounds_input,
        ),
        (
            CountField::Letters,
            "🔤 Количество букв",
            "б.",
            &session.letters_input,
        ),
    ];
    for ((field, title, unit, value), chunk) in fields.iter().zip(chunks.iter()) {
        let focused = *field == session.focused_field && session.feedback == Feedback::None;
        let shown = if value.is_empty() { "?" } else { value.as_str() };
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(format!("{} {}", shown, unit))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(*title),
            );
        f.render_widget(input, *chunk);
    }

    let mut text = Text::default();
    let button = if session.feedback != Feedback::None {
        Span::styled("Проверяем...", Style::default().fg(Color::DarkGray))
    } else if session.counts_ready() {
        Span::styled(
            "[ Проверить ответ ]",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ Проверить ответ ]", Style::default().fg(Color::DarkGray))
    };
    text.push_line(Line::from(button));
    push_feedback(&mut text, session.feedback);

    let status = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);
}

fn push_feedback(text: &mut Text<'static>, feedback: Feedback) {
    match feedback {
        Feedback::Correct => {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                "✅ Правильно!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Feedback::Wrong => {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                "❌ Неверно",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        Feedback::None => {}
    }
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Выйти из задания")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Вернуться на главную? Результат не сохранится.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Да, на главную  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" Нет, продолжить  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Закрыть"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
