use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Score;

use super::Screen;

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen) {
    let view = screen.view;
    let mut content = vec![
        Line::from(Span::styled("モード", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            view.mode.label(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled("スコア", Style::default().fg(Color::DarkGray))),
    ];
    content.extend(score_lines(view.score));

    if let Some(status) = screen.status {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            status,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Color::DarkGray)
            .padding(Padding::new(2, 1, 1, 1)),
    );
    frame.render_widget(widget, area);
}

fn score_lines(score: Score) -> Vec<Line<'static>> {
    if score.total == 0 {
        return vec![Line::from(Span::styled("-", Style::default().fg(Color::Gray)))];
    }

    let percentage = score.percentage();
    vec![
        Line::from(Span::styled(
            format!("{}/{}", score.correct, score.total),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        Line::from(Span::styled(
            format!("正解率: {:.1}%", percentage),
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
