mod quiz;
mod result;
mod sidebar;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::session::{Phase, SessionView};

const SIDEBAR_WIDTH: u16 = 32;

/// What one frame shows: a session snapshot plus front-end local state.
pub struct Screen<'a> {
    pub view: &'a SessionView,
    pub cursor: usize,
    pub notice: Option<&'a str>,
    /// Connection line shown by the remote client.
    pub status: Option<&'a str>,
}

pub fn render(frame: &mut Frame, screen: &Screen) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(columns[0]);

    render_header(frame, rows[0]);

    match screen.view.phase {
        Phase::Idle => welcome::render(frame, rows[1], screen.view),
        Phase::ShowingQuestion => quiz::render(frame, rows[1], screen),
        Phase::ShowingResult => result::render(frame, rows[1], screen.view),
    }

    render_notice(frame, rows[2], screen.notice);
    render_controls(frame, rows[3], screen.view.phase);
    sidebar::render(frame, columns[1], screen);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "百人一首ゲーム",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("日本の古典和歌を楽しく学習しましょう".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, phase: Phase) {
    let hint = match phase {
        Phase::Idle => "←/→ mode  ·  enter new question  ·  r reset  ·  q quit",
        Phase::ShowingQuestion => "j/k navigate  ·  enter/1-4 answer  ·  n skip  ·  q quit",
        Phase::ShowingResult => "enter next question  ·  b back  ·  r reset  ·  q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
