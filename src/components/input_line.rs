use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme::Theme;

pub struct InputLine;

impl InputLine {
    pub fn render(frame: &mut Frame, area: Rect, mode: InputMode, value: &str, theme: &Theme) {
        let (label, active) = match mode {
            InputMode::Editing => ("Task:", true),
            InputMode::Command => ("Say:", true),
            InputMode::Normal => ("Task:", false),
        };

        let border = if active {
            Style::default().fg(Color::Cyan)
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title_bottom(Line::from(Span::styled(
                if active { " Enter:Save Esc:Cancel " } else { " a:Type :Command " },
                theme.dim,
            )));

        let cursor = if active { "_" } else { "" };
        let value_style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            theme.dim
        };

        let line = Line::from(vec![
            Span::styled(format!("{:<6}", label), theme.dim),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
