use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tasks",
        &[
            ("a / i     ", "Type a new task"),
            ("j/k \u{2191}/\u{2193} ", "Select task"),
            ("m         ", "Mark selected done"),
            ("d / Del   ", "Delete selected"),
        ],
    ),
    (
        "Voice",
        &[
            ("v         ", "Start listening"),
            (":         ", "Type a voice command"),
        ],
    ),
    (
        "Display",
        &[
            ("[ / ]     ", "Previous/next month"),
            ("t         ", "Jump to this month"),
            ("n         ", "Toggle night mode"),
        ],
    ),
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_w = area.width.clamp(30, 48).min(area.width);
        let popup_h = area.height.clamp(12, 20).min(area.height);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .style(theme.base);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut lines = Vec::new();
        for (section, keys) in BINDINGS {
            lines.push(Line::from(Span::styled(*section, section_style)));
            for (key, desc) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key}"), key_style),
                    Span::raw(*desc),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme.dim),
            Span::styled("Esc     ", key_style),
            Span::raw("Quit / close popup"),
        ]));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
