use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;

const INTERRUPT_POLL: Duration = Duration::from_millis(50);

/// Source of interactive answers.
///
/// `Ok(None)` means no answer will arrive: the input was closed or the user
/// pressed Ctrl-C while the prompt was waiting.
pub trait Prompt {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// Installs a Ctrl-C handler that raises the returned flag instead of
/// terminating the process.
pub fn install_interrupt_flag() -> anyhow::Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;
    Ok(interrupted)
}

/// Answers read line by line, abandoned when the interrupt flag is raised.
///
/// Lines arrive over a channel so a blocked terminal read never keeps the
/// prompt from noticing Ctrl-C.
#[derive(Debug)]
pub struct StdinPrompt {
    lines: Receiver<io::Result<String>>,
    interrupted: Arc<AtomicBool>,
}

impl StdinPrompt {
    /// Starts a reader thread on standard input.
    pub fn spawn(interrupted: Arc<AtomicBool>) -> Self {
        let (sender, lines) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            loop {
                let mut line = String::new();
                match stdin.lock().read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        if sender.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => {
                        let _ = sender.send(Err(err));
                        break;
                    }
                }
            }
        });
        Self::from_channel(lines, interrupted)
    }

    pub fn from_channel(lines: Receiver<io::Result<String>>, interrupted: Arc<AtomicBool>) -> Self {
        Self { lines, interrupted }
    }

    fn next_line(&self) -> io::Result<Option<String>> {
        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                tracing::debug!("prompt interrupted");
                return Ok(None);
            }
            match self.lines.recv_timeout(INTERRUPT_POLL) {
                Ok(Ok(line)) => {
                    return Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
                }
                Ok(Err(err)) => return Err(err),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Ok(None),
            }
        }
    }
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;
        self.next_line()
    }
}

/// Replays a fixed list of answers; runs out as if input were closed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front())
    }
}
