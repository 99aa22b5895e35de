use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::calendar::{CalendarView, MonthGrid};
use crate::tasks::{TaskList, TaskStore};
use crate::theme::{Theme, Themes};
use crate::voice::{VoiceCommand, VoiceInput, VoiceState, VoiceUpdate, UNRECOGNIZED_MESSAGE};

pub const DAY_LABEL: &str = "🌞 Day/Night";
pub const NIGHT_LABEL: &str = "🌙 Night/Day";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing a new task.
    Editing,
    /// Typing a phrase for the voice interpreter.
    Command,
}

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub input: String,
    pub show_help: bool,
    pub selected: usize,
    pub status: String,
    pub night_mode: bool,
    pub calendar: CalendarView,
    pub today: NaiveDate,
    tasks: TaskList,
    store: TaskStore,
    voice: VoiceInput,
    themes: Themes,
}

impl App {
    pub fn new(store: TaskStore, voice: VoiceInput, themes: Themes, today: NaiveDate) -> Self {
        let tasks = store.load_persisted();
        Self {
            running: true,
            input_mode: InputMode::Normal,
            input: String::new(),
            show_help: false,
            selected: 0,
            status: String::new(),
            night_mode: false,
            calendar: CalendarView::containing(today),
            today,
            tasks,
            store,
            voice,
            themes,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn theme(&self) -> &Theme {
        self.themes.active(self.night_mode)
    }

    pub fn voice_state(&self) -> VoiceState {
        self.voice.state()
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(self.calendar, self.today)
    }

    // ── task manager ──

    pub fn add_task(&mut self, text: &str) {
        if !self.tasks.add(text) {
            return;
        }
        info!(count = self.tasks.len(), "task added");
        self.status.clear();
        self.persist();
    }

    pub fn delete_task(&mut self, index: usize) {
        if self.tasks.delete(index).is_none() {
            return;
        }
        info!(index, count = self.tasks.len(), "task deleted");
        self.clamp_selection();
        self.status.clear();
        self.persist();
    }

    pub fn mark_task(&mut self, index: usize) {
        if !self.tasks.mark(index) {
            return;
        }
        info!(index, "task marked done");
        self.persist();
    }

    pub fn mark_selected(&mut self) {
        self.mark_task(self.selected);
    }

    pub fn delete_selected(&mut self) {
        self.delete_task(self.selected);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.persist(&self.tasks) {
            error!(error = ?err, "failed to save tasks");
            self.status = format!("Could not save tasks: {err}");
        }
    }

    // ── input line ──

    pub fn begin_input(&mut self, mode: InputMode) {
        self.input.clear();
        self.input_mode = mode;
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Enter on the input line. Blank input keeps the line open.
    pub fn submit_input(&mut self) {
        let value = self.input.trim().to_string();
        if value.is_empty() {
            return;
        }
        match self.input_mode {
            InputMode::Editing => self.add_task(&value),
            InputMode::Command => self.apply_voice_update(VoiceUpdate::heard(&value)),
            InputMode::Normal => return,
        }
        self.cancel_input();
    }

    // ── voice ──

    pub fn start_listening(&mut self) {
        match self.voice.start_listening() {
            Ok(true) => {}
            Ok(false) => info!("start ignored; already listening"),
            Err(err) => {
                warn!(error = ?err, "could not start recognition");
                self.status = format!("Speech recognition error: {err}");
            }
        }
    }

    /// Applies every recognizer event that has arrived since the last frame.
    pub fn pump_voice(&mut self) {
        for event in self.voice.drain() {
            let update = self.voice.handle(event);
            self.apply_voice_update(update);
        }
    }

    fn apply_voice_update(&mut self, update: VoiceUpdate) {
        match update {
            VoiceUpdate::Status(text) => self.status = text,
            VoiceUpdate::Heard {
                transcript,
                command,
            } => {
                self.status = format!("Heard: \"{transcript}\"");
                match command {
                    VoiceCommand::Add(text) => self.add_task(&text),
                    VoiceCommand::Remove(index) => {
                        if let Ok(index) = usize::try_from(index) {
                            self.delete_task(index);
                        }
                    }
                    VoiceCommand::Ignored => {}
                    VoiceCommand::Unrecognized => self.status = UNRECOGNIZED_MESSAGE.to_string(),
                }
            }
            VoiceUpdate::Nothing => {}
        }
    }

    // ── display ──

    pub fn toggle_night_mode(&mut self) {
        self.night_mode = !self.night_mode;
    }

    pub fn mode_label(&self) -> &'static str {
        if self.night_mode {
            NIGHT_LABEL
        } else {
            DAY_LABEL
        }
    }

    pub fn prev_month(&mut self) {
        self.calendar.prev_month();
    }

    pub fn next_month(&mut self) {
        self.calendar.next_month();
    }

    pub fn go_to_today(&mut self) {
        self.today = Local::now().date_naive();
        self.calendar = CalendarView::containing(self.today);
    }

    /// Keeps the today marker right across midnight.
    pub fn tick(&mut self, now: NaiveDate) {
        self.today = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::store::{KeyValueStore, MemoryStore, TASKS_KEY};
    use crate::tasks::FileStore;
    use crate::voice::recognizer::{RecognitionError, RecognitionEvent, ScriptedRecognizer};
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn app_with(sessions: Vec<Vec<RecognitionEvent>>) -> App {
        let store = TaskStore::new(Box::new(MemoryStore::default()));
        let voice = VoiceInput::new(Box::new(ScriptedRecognizer::with_sessions(sessions)), "en-US");
        App::new(store, voice, Themes::default(), today())
    }

    fn heard(phrase: &str) -> Vec<RecognitionEvent> {
        vec![
            RecognitionEvent::Started,
            RecognitionEvent::Result(vec![phrase.to_string()]),
            RecognitionEvent::Ended,
        ]
    }

    fn texts(app: &App) -> Vec<String> {
        app.tasks().as_slice().iter().map(|t| t.text()).collect()
    }

    #[test]
    fn add_clears_status_and_rejects_blank() {
        let mut app = app_with(vec![]);
        app.status = "old".to_string();
        app.add_task("   ");
        assert_eq!(app.tasks().len(), 0);
        assert_eq!(app.status, "old");

        app.add_task("buy milk");
        assert_eq!(texts(&app), vec!["buy milk"]);
        assert!(app.status.is_empty());
    }

    #[test]
    fn delete_keeps_selection_in_bounds() {
        let mut app = app_with(vec![]);
        app.add_task("a");
        app.add_task("b");
        app.selected = 1;
        app.delete_selected();
        assert_eq!(texts(&app), vec!["a"]);
        assert_eq!(app.selected, 0);

        app.delete_selected();
        assert!(app.tasks().is_empty());
        assert_eq!(app.selected, 0);
        app.mark_selected();
        app.delete_selected();
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn mutations_persist_to_the_store() {
        let dir = tempdir().expect("tempdir");
        let open = || TaskStore::new(Box::new(FileStore::open(dir.path()).expect("open")));
        let voice = || VoiceInput::new(Box::new(ScriptedRecognizer::default()), "en-US");

        let mut app = App::new(open(), voice(), Themes::default(), today());
        app.add_task("one");
        app.add_task("two");
        app.mark_task(0);
        app.delete_task(1);

        let reloaded = App::new(open(), voice(), Themes::default(), today());
        assert_eq!(reloaded.tasks(), app.tasks());
        assert!(reloaded.tasks().get(0).unwrap().is_done());

        let raw = FileStore::open(dir.path()).unwrap().get(TASKS_KEY).unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, serde_json::json!([{"text": "one", "done": true}]));
    }

    #[test]
    fn voice_add_creates_task_and_clears_heard_status() {
        let mut app = app_with(vec![heard("Add task buy milk")]);
        app.start_listening();
        app.pump_voice();
        assert_eq!(texts(&app), vec!["buy milk"]);
        assert!(!app.tasks().get(0).unwrap().is_done());
        assert!(app.status.is_empty());
        assert_eq!(app.voice_state(), VoiceState::Idle);
    }

    #[test]
    fn voice_remove_uses_one_based_position() {
        let mut app = app_with(vec![heard("remove task 2"), heard("remove task 9")]);
        app.add_task("a");
        app.add_task("b");
        app.add_task("c");

        app.start_listening();
        app.pump_voice();
        assert_eq!(texts(&app), vec!["a", "c"]);

        app.start_listening();
        app.pump_voice();
        assert_eq!(texts(&app), vec!["a", "c"]);
        assert_eq!(app.status, "Heard: \"remove task 9\"");
    }

    #[test]
    fn unrecognized_and_error_set_status() {
        let mut app = app_with(vec![
            heard("sing a song"),
            vec![
                RecognitionEvent::Started,
                RecognitionEvent::Error(RecognitionError::NoSpeech),
                RecognitionEvent::Ended,
            ],
        ]);
        app.start_listening();
        app.pump_voice();
        assert_eq!(app.status, UNRECOGNIZED_MESSAGE);

        app.start_listening();
        app.pump_voice();
        assert_eq!(app.status, "Speech recognition error: no-speech");
    }

    #[test]
    fn listening_status_shows_until_result_arrives() {
        let mut app = app_with(vec![vec![RecognitionEvent::Started]]);
        app.start_listening();
        app.pump_voice();
        assert_eq!(app.status, "Listening...");
        assert_eq!(app.voice_state(), VoiceState::Listening);
        app.start_listening();
        assert_eq!(app.voice_state(), VoiceState::Listening);
    }

    #[test]
    fn typed_command_goes_through_interpreter() {
        let mut app = app_with(vec![]);
        app.begin_input(InputMode::Command);
        for c in "ADD TASK call mom".chars() {
            app.input_char(c);
        }
        app.submit_input();
        assert_eq!(texts(&app), vec!["call mom"]);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn manual_entry_trims_and_ignores_blank() {
        let mut app = app_with(vec![]);
        app.begin_input(InputMode::Editing);
        app.input_char(' ');
        app.submit_input();
        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.tasks().is_empty());

        for c in "water plants ".chars() {
            app.input_char(c);
        }
        app.submit_input();
        assert_eq!(texts(&app), vec!["water plants"]);
        assert!(app.input.is_empty());
    }

    #[test]
    fn corrupted_storage_starts_empty() {
        let mut backend = MemoryStore::default();
        backend.entries.insert(TASKS_KEY.to_string(), "[oops".to_string());
        let voice = VoiceInput::new(Box::new(ScriptedRecognizer::default()), "en-US");
        let app = App::new(TaskStore::new(Box::new(backend)), voice, Themes::default(), today());
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn night_mode_swaps_label_and_theme() {
        let mut app = app_with(vec![]);
        assert_eq!(app.mode_label(), DAY_LABEL);
        app.toggle_night_mode();
        assert_eq!(app.mode_label(), NIGHT_LABEL);
        assert_eq!(app.theme().name, "night");
    }

    #[test]
    fn month_navigation_wraps() {
        let mut app = app_with(vec![]);
        assert_eq!(app.calendar, CalendarView { month: 9, year: 2026 });
        for _ in 0..3 {
            app.next_month();
        }
        assert_eq!(app.calendar, CalendarView { month: 0, year: 2027 });
        app.prev_month();
        assert_eq!(app.calendar.title(), "December 2026");
    }
}
