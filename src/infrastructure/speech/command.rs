//! Subprocess speech engine adapter
//!
//! Runs a user-configured speech-to-text command and treats each line
//! it prints on stdout as the full transcript so far. The command is
//! invoked with the locale appended as its final argument and is
//! killed when the session stops recording.

use std::env;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, Mutex};

use crate::application::ports::{SpeechEngine, SpeechError, TranscriptEvent};

/// Speech engine backed by an external command
pub struct CommandSpeechEngine {
    program: String,
    args: Vec<String>,
    child: Mutex<Option<Child>>,
}

impl CommandSpeechEngine {
    /// Create an engine from a whitespace-separated command line
    pub fn from_command_line(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        Self {
            program,
            args: parts.collect(),
            child: Mutex::new(None),
        }
    }

    /// Check whether the configured program can be resolved
    fn program_resolves(&self) -> bool {
        if self.program.is_empty() {
            return false;
        }
        if self.program.contains('/') {
            return Path::new(&self.program).is_file();
        }
        env::var_os("PATH")
            .map(|paths| {
                env::split_paths(&paths).any(|dir| dir.join(&self.program).is_file())
            })
            .unwrap_or(false)
    }
}

#[async_trait]
impl SpeechEngine for CommandSpeechEngine {
    fn is_available(&self) -> bool {
        self.program_resolves()
    }

    async fn start(
        &self,
        locale: &str,
    ) -> Result<mpsc::UnboundedReceiver<TranscriptEvent>, SpeechError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(locale)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SpeechError::StartFailed(e.to_string()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SpeechError::StartFailed("no stdout handle".to_string()))?;

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(TranscriptEvent::Transcript(line)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        let _ = tx.send(TranscriptEvent::Error(e.to_string()));
                        break;
                    }
                }
            }
        });

        *self.child.lock().await = Some(child);
        Ok(rx)
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        let child = self.child.lock().await.take();
        let Some(mut child) = child else {
            return Ok(());
        };

        // The command may have already exited on its own
        if let Ok(Some(_)) = child.try_wait() {
            return Ok(());
        }

        child
            .kill()
            .await
            .map_err(|e| SpeechError::StopFailed(e.to_string()))
    }

    fn is_active(&self) -> bool {
        // A held lock means a start or stop is already in flight
        match self.child.try_lock() {
            Ok(guard) => guard.is_some(),
            Err(_) => true,
        }
    }
}
