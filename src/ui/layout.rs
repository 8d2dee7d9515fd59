use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct HomeLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub nav_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub gauge_area: Rect,
    pub mascot_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_home_chunks(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    HomeLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        nav_area: chunks[2],
        help_area: chunks[3],
    }
}

/// The mascot row collapses to zero height on tasks without the fox.
pub fn calculate_quiz_chunks(area: Rect, with_mascot: bool) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(if with_mascot { 3 } else { 0 }),
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        gauge_area: chunks[1],
        mascot_area: chunks[2],
        question_area: chunks[3],
        answer_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_layout() {
        let layout = calculate_home_chunks(Rect::new(0, 0, 80, 40));
        assert_eq!(layout.header_area.height, 4);
        assert_eq!(layout.nav_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        // 40 - 2 (margin) - 4 - 3 - 3
        assert_eq!(layout.body_area.height, 28);
    }

    #[test]
    fn test_quiz_layout_with_and_without_mascot() {
        let area = Rect::new(0, 0, 80, 40);
        let with_fox = calculate_quiz_chunks(area, true);
        assert_eq!(with_fox.header_area.height, 3);
        assert_eq!(with_fox.gauge_area.height, 1);
        assert_eq!(with_fox.mascot_area.height, 3);
        assert_eq!(with_fox.help_area.height, 3);

        let without_fox = calculate_quiz_chunks(area, false);
        assert_eq!(without_fox.mascot_area.height, 0);
        assert_eq!(
            without_fox.answer_area.height,
            with_fox.answer_area.height + 3
        );
    }

    #[test]
    fn test_summary_layout() {
        let layout = calculate_summary_chunks(Rect::new(0, 0, 100, 100));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.content_area.height, 92);
    }
}
