use crate::completion::CompletionSummary;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{help_line, star_row};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, summary: &CompletionSummary) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new(format!(
        "{} {}: готово!",
        summary.kind.emoji(),
        summary.kind.title()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from("🎉"));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        summary.message,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(summary.result_line()));
    text.push_line(Line::from(""));
    text.push_line(Line::from(star_row(summary.stars)));

    let content = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, layout.content_area);

    let help = Paragraph::new(help_line(&[("Enter", "На главную"), ("Ctrl+C", "Закрыть")]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
