use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Poem;
use crate::session::{AnswerOutcome, SessionView};

pub fn render(frame: &mut Frame, area: Rect, view: &SessionView) {
    let Some(result) = &view.result else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).split(area);

    render_verdict(frame, chunks[0], &result.outcome);
    render_poem_detail(frame, chunks[1], &result.poem);
}

fn render_verdict(frame: &mut Frame, area: Rect, outcome: &AnswerOutcome) {
    let mut content = Vec::with_capacity(3);
    if outcome.is_correct {
        content.push(Line::from(Span::styled(
            "正解です！",
            Style::default().fg(Color::Green).bold(),
        )));
    } else {
        content.push(Line::from(Span::styled(
            "不正解です",
            Style::default().fg(Color::Red).bold(),
        )));
        content.push(Line::from(vec![
            Span::styled("あなたの回答: ", Style::default().fg(Color::DarkGray)),
            Span::styled(outcome.chosen.as_str(), Style::default().fg(Color::Gray)),
        ]));
        content.push(Line::from(vec![
            Span::styled("正解: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                outcome.correct_answer.as_str(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_poem_detail(frame: &mut Frame, area: Rect, poem: &Poem) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let reading = Style::default().fg(Color::Gray).italic();

    let content = vec![
        Line::from(vec![
            Span::styled("作者    ", label),
            Span::styled(poem.author.as_str(), value.bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("上の句  ", label),
            Span::styled(poem.upper.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("        ", label),
            Span::styled(poem.reading_upper.as_str(), reading),
        ]),
        Line::from(vec![
            Span::styled("下の句  ", label),
            Span::styled(poem.lower.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("        ", label),
            Span::styled(poem.reading_lower.as_str(), reading),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("解説    ", label),
            Span::styled(poem.description.as_str(), value),
        ]),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" 歌の詳細 · 第{}首 ", poem.id))
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
