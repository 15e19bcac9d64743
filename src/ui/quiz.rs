use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{CHOICE_COUNT, GameMode};

use super::Screen;

const OPTION_LABELS: [char; CHOICE_COUNT] = ['1', '2', '3', '4'];

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen) {
    let Some(question) = &screen.view.question else {
        return;
    };

    let prompt_height = match question.kind {
        GameMode::LowerVerse => 3,
        GameMode::Author => 4,
    };
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(prompt_height + 2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    render_instruction(frame, chunks[0], question.kind);
    render_prompt(frame, chunks[1], &question.prompt);
    render_choices(frame, chunks[3], &question.choices, screen.cursor);
}

fn render_instruction(frame: &mut Frame, area: Rect, kind: GameMode) {
    let text = match kind {
        GameMode::LowerVerse => "下の句はどれでしょう？",
        GameMode::Author => "この歌の作者は誰でしょう？",
    };
    let widget = Paragraph::new(text).fg(Color::White).bold();
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let lines: Vec<Line> = prompt
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Yellow))))
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" 問題 ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_choices(frame: &mut Frame, area: Rect, choices: &[String; CHOICE_COUNT], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(choice.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
