use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pregame_common::events::{EventSink, RunEvent};
use pregame_core::events::TracingSink;

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn with_spinner<T>(f: impl FnOnce(&mut Option<ProgressBar>) -> T) -> T {
    let mut guard = SPINNER.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

pub fn start(msg: String) {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));

    with_spinner(|slot| {
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    });
}

pub fn set_message(msg: String) {
    with_spinner(|slot| {
        if let Some(pb) = slot.as_ref() {
            pb.set_message(msg);
        }
    });
}

pub fn finish() {
    with_spinner(|slot| {
        if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    });
}

/// Terminal writer that keeps log lines from tearing through a running spinner.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        with_spinner(|slot| match slot.as_ref() {
            Some(pb) => pb.suspend(|| io::stdout().write_all(buf)),
            None => io::stdout().write_all(buf),
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Logs every event through [`TracingSink`] and shows a spinner while the
/// interface is being changed.
pub struct ProgressSink {
    inner: TracingSink,
}

impl ProgressSink {
    pub fn new() -> Self {
        Self { inner: TracingSink }
    }
}

impl EventSink for ProgressSink {
    fn record(&self, event: &RunEvent) {
        match event {
            RunEvent::ChangeStarted { interface, address } => {
                self.inner.record(event);
                start(format!(
                    "Changing address of {} to {}...",
                    interface.bold(),
                    address.to_string().cyan()
                ));
            }
            RunEvent::AttemptFailed { attempt, backoff, .. } => {
                self.inner.record(event);
                set_message(format!(
                    "Attempt {} failed, retrying in {}s...",
                    attempt.to_string().yellow().bold(),
                    backoff.as_secs_f32()
                ));
            }
            RunEvent::AttemptSucceeded { .. } | RunEvent::GaveUp { .. } => {
                finish();
                self.inner.record(event);
            }
            _ => self.inner.record(event),
        }
    }
}
