mod app;
mod calendar;
mod clock;
mod components;
mod config;
mod event;
mod logging;
mod tasks;
mod theme;
mod tui;
mod voice;

use std::time::Duration;

use app::{App, InputMode};
use chrono::{Local, NaiveTime};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;
use tracing::{info, warn};

use config::Config;
use tasks::{FileStore, TaskStore};
use voice::{CommandRecognizer, Recognizer, UnavailableRecognizer, VoiceInput};

fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let data_dir = config.data_dir();
    match logging::init(&config.log.level, &data_dir) {
        Ok(path) => info!(log = %path.display(), "logging ready"),
        Err(err) => eprintln!("Logging disabled: {err:#}"),
    }
    if let Some(err) = config_error {
        warn!(error = ?err, "ignoring unreadable config; using defaults");
    }

    let store = TaskStore::new(Box::new(FileStore::open(&data_dir)?));
    let recognizer: Box<dyn Recognizer> = match CommandRecognizer::from_argv(&config.voice.command) {
        Some(recognizer) => Box::new(recognizer),
        None => {
            info!("no speech program configured; voice input unavailable");
            Box::new(UnavailableRecognizer)
        }
    };
    let voice = VoiceInput::new(recognizer, config.voice.lang.clone());
    let mut app = App::new(store, voice, config.theme.into_themes(), Local::now().date_naive());

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    info!("exiting");
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.pump_voice();
        let now = Local::now();
        app.tick(now.date_naive());

        terminal.draw(|frame| draw(frame, app, now.time()))?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            // Help overlay takes priority
            if app.show_help {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    app.show_help = false;
                }
                continue;
            }

            match app.input_mode {
                InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
                InputMode::Editing | InputMode::Command => handle_line_input(app, key.code),
            }
        }
    }

    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('a'), _) | (KeyCode::Char('i'), _) => app.begin_input(InputMode::Editing),
        (KeyCode::Char(':'), _) => app.begin_input(InputMode::Command),
        (KeyCode::Char('v'), _) => app.start_listening(),
        (KeyCode::Char('m'), _) => app.mark_selected(),
        (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => app.delete_selected(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.select_prev(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.select_next(),
        (KeyCode::Char('['), _) => app.prev_month(),
        (KeyCode::Char(']'), _) => app.next_month(),
        (KeyCode::Char('t'), _) => app.go_to_today(),
        (KeyCode::Char('n'), _) => app.toggle_night_mode(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn handle_line_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

fn draw(frame: &mut ratatui::Frame, app: &App, time: NaiveTime) {
    let area = frame.area();
    let theme = app.theme();

    frame.render_widget(Block::default().style(theme.base), area);

    // Main layout: content + input line + status bar
    let layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);

    render_content(frame, layout[0], app, time);

    components::InputLine::render(frame, layout[1], app.input_mode, &app.input, theme);
    components::StatusBar::render(frame, layout[2], app);

    if app.show_help {
        components::HelpOverlay::render(frame, area, theme);
    }
}

fn render_content(frame: &mut ratatui::Frame, area: Rect, app: &App, time: NaiveTime) {
    let theme = app.theme();
    let grid = app.month_grid();
    let [tasks, clock, month] = content_regions(area);

    components::TaskListView::render(frame, tasks, app.tasks(), app.selected, theme);
    components::ClockFace::render(frame, clock, time, theme);
    components::MonthView::render(frame, month, app.calendar, &grid, theme);
}

/// Task list, clock and month regions. Wide screens stack the clock over the
/// month in a side pane; narrow ones put both under the list, clock on the right.
fn content_regions(area: Rect) -> [Rect; 3] {
    if area.width < 70 {
        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(9)]).split(area);
        let bottom = Layout::horizontal([Constraint::Length(37), Constraint::Min(0)]).split(rows[1]);
        return [rows[0], bottom[1], bottom[0]];
    }

    let columns = Layout::horizontal([Constraint::Min(30), Constraint::Length(39)]).split(area);
    let side = Layout::vertical([Constraint::Min(0), Constraint::Length(10)]).split(columns[1]);
    [columns[0], side[0], side[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_layout_keeps_a_clock_region() {
        let [tasks, clock, month] = content_regions(Rect::new(0, 0, 60, 30));
        assert_eq!(month.width, 37);
        assert_eq!(clock.width, 23);
        assert_eq!(clock.height, 9);
        assert_eq!(clock.y, month.y);
        assert!(tasks.bottom() <= clock.y);
    }

    #[test]
    fn wide_layout_stacks_clock_over_month() {
        let [tasks, clock, month] = content_regions(Rect::new(0, 0, 100, 30));
        assert_eq!(tasks.width, 61);
        assert_eq!(clock.x, month.x);
        assert_eq!(clock.height, 20);
        assert_eq!(month.height, 10);
    }
}
