pub mod command;
pub mod recognizer;

use color_eyre::eyre::Result;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

pub use command::{VoiceCommand, UNRECOGNIZED_MESSAGE};
pub use recognizer::{CommandRecognizer, RecognitionEvent, Recognizer, UnavailableRecognizer};

pub const LISTENING_MESSAGE: &str = "Listening...";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoiceState {
    Idle,
    Listening,
}

/// What the controller should do in response to one recognizer event.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceUpdate {
    Status(String),
    Heard {
        transcript: String,
        command: VoiceCommand,
    },
    Nothing,
}

impl VoiceUpdate {
    /// Treats `phrase` as if the recognizer had heard it.
    pub fn heard(phrase: &str) -> Self {
        let transcript = phrase.to_lowercase();
        let command = VoiceCommand::parse(&transcript);
        VoiceUpdate::Heard {
            transcript,
            command,
        }
    }
}

/// Owns the recognizer and the single-session state machine.
pub struct VoiceInput {
    recognizer: Box<dyn Recognizer>,
    lang: String,
    state: VoiceState,
    tx: UnboundedSender<RecognitionEvent>,
    rx: UnboundedReceiver<RecognitionEvent>,
}

impl VoiceInput {
    pub fn new(recognizer: Box<dyn Recognizer>, lang: impl Into<String>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            recognizer,
            lang: lang.into(),
            state: VoiceState::Idle,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    /// Starts a session unless one is already running. Returns whether a
    /// session was started.
    pub fn start_listening(&mut self) -> Result<bool> {
        if self.state == VoiceState::Listening {
            debug!("recognition already active; ignoring start");
            return Ok(false);
        }
        self.state = VoiceState::Listening;
        if let Err(err) = self.recognizer.start(&self.lang, self.tx.clone()) {
            self.state = VoiceState::Idle;
            return Err(err);
        }
        info!(lang = %self.lang, "listening");
        Ok(true)
    }

    /// Pending recognizer events, without blocking.
    pub fn drain(&mut self) -> Vec<RecognitionEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Maps one event to an update. Only `Ended` closes the session, so a
    /// start pressed between a result and its `Ended` is still ignored.
    pub fn handle(&mut self, event: RecognitionEvent) -> VoiceUpdate {
        match event {
            RecognitionEvent::Started => VoiceUpdate::Status(LISTENING_MESSAGE.to_string()),
            RecognitionEvent::Result(alternatives) => {
                let first = alternatives.into_iter().next().unwrap_or_default();
                let update = VoiceUpdate::heard(&first);
                debug!(?update, "recognized utterance");
                update
            }
            RecognitionEvent::Error(reason) => {
                info!(%reason, "recognition failed");
                VoiceUpdate::Status(format!("Speech recognition error: {reason}"))
            }
            RecognitionEvent::Ended => {
                self.state = VoiceState::Idle;
                VoiceUpdate::Nothing
            }
        }
    }
}
