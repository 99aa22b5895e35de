use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use crate::voice::VoiceState;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let style = app.theme().status;

        let voice = match app.voice_state() {
            VoiceState::Listening => " [mic]",
            VoiceState::Idle => "",
        };
        let focus = match app.input_mode {
            InputMode::Editing => " [New Task]",
            InputMode::Command => " [Command]",
            InputMode::Normal => "",
        };
        let left = format!(" {}{}{} ", app.mode_label(), voice, focus);

        // Status text wins over hints.
        let right = if !app.status.is_empty() {
            format!(" {} ", app.status)
        } else if w >= 80 {
            " a:Add v:Speak :Cmd m:Mark d:Del [/]:Mon n:Night ?:Help q:Quit ".to_string()
        } else if w >= 50 {
            " a:Add v:Speak m:Mark d:Del q:Quit ".to_string()
        } else {
            " ?:Help q:Quit ".to_string()
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right.chars().count()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
