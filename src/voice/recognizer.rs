use std::fmt;
use std::io::ErrorKind;
use std::process::Command;
use std::thread;

use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionError {
    NoSpeech,
    Aborted,
    AudioCapture,
    NotAllowed,
    ServiceNotAllowed,
    Other(String),
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RecognitionError::NoSpeech => "no-speech",
            RecognitionError::Aborted => "aborted",
            RecognitionError::AudioCapture => "audio-capture",
            RecognitionError::NotAllowed => "not-allowed",
            RecognitionError::ServiceNotAllowed => "service-not-allowed",
            RecognitionError::Other(reason) => reason,
        };
        f.write_str(reason)
    }
}

/// Callbacks of a single recognition session, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    Started,
    /// Alternatives for the first result, best first.
    Result(Vec<String>),
    Error(RecognitionError),
    Ended,
}

pub type EventSender = UnboundedSender<RecognitionEvent>;

/// Speech-to-text capability. One call to `start` is one non-continuous
/// session; events are delivered later through `events`.
pub trait Recognizer {
    fn start(&mut self, lang: &str, events: EventSender) -> Result<()>;
}

/// Used when no speech program is configured.
#[derive(Debug, Default)]
pub struct UnavailableRecognizer;

impl Recognizer for UnavailableRecognizer {
    fn start(&mut self, _lang: &str, events: EventSender) -> Result<()> {
        let _ = events.send(RecognitionEvent::Started);
        let _ = events.send(RecognitionEvent::Error(RecognitionError::ServiceNotAllowed));
        let _ = events.send(RecognitionEvent::Ended);
        Ok(())
    }
}

/// Runs an external speech-to-text program once per session on a worker
/// thread. Its stdout lines are the transcript alternatives.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    /// `argv[0]` is the program. Returns `None` for an empty command.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn args_for(&self, lang: &str) -> Vec<String> {
        self.args.iter().map(|a| a.replace("{lang}", lang)).collect()
    }
}

impl Recognizer for CommandRecognizer {
    fn start(&mut self, lang: &str, events: EventSender) -> Result<()> {
        let program = self.program.clone();
        let args = self.args_for(lang);
        info!(program = %program, ?args, "starting recognition session");

        thread::Builder::new()
            .name("recognizer".to_string())
            .spawn(move || {
                let _ = events.send(RecognitionEvent::Started);
                let outcome = run_once(&program, &args);
                let event = match outcome {
                    Ok(alternatives) => RecognitionEvent::Result(alternatives),
                    Err(err) => RecognitionEvent::Error(err),
                };
                debug!(?event, "recognition session finished");
                let _ = events.send(event);
                let _ = events.send(RecognitionEvent::Ended);
            })
            .wrap_err("failed to spawn recognizer thread")?;
        Ok(())
    }
}

fn run_once(program: &str, args: &[String]) -> std::result::Result<Vec<String>, RecognitionError> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(program, "speech program not found");
            return Err(RecognitionError::ServiceNotAllowed);
        }
        Err(err) if err.kind() == ErrorKind::PermissionDenied => {
            return Err(RecognitionError::NotAllowed);
        }
        Err(err) => return Err(RecognitionError::Other(err.to_string())),
    };

    if !output.status.success() {
        warn!(status = %output.status, "speech program failed");
        // No exit code means the program was killed by a signal.
        return Err(match output.status.code() {
            Some(_) => RecognitionError::AudioCapture,
            None => RecognitionError::Aborted,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let alternatives = transcript_lines(&stdout);
    if alternatives.is_empty() {
        return Err(RecognitionError::NoSpeech);
    }
    Ok(alternatives)
}

fn transcript_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replays queued sessions; each `start` pops the next one.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    pub sessions: std::collections::VecDeque<Vec<RecognitionEvent>>,
    pub starts: usize,
}

#[cfg(test)]
impl ScriptedRecognizer {
    pub fn with_sessions(sessions: Vec<Vec<RecognitionEvent>>) -> Self {
        Self {
            sessions: sessions.into(),
            starts: 0,
        }
    }
}

#[cfg(test)]
impl Recognizer for ScriptedRecognizer {
    fn start(&mut self, _lang: &str, events: EventSender) -> Result<()> {
        self.starts += 1;
        if let Some(session) = self.sessions.pop_front() {
            for event in session {
                let _ = events.send(event);
            }
        }
        Ok(())
    }
}
