//! Progress display for manifest compilation
//!
//! Wraps indicatif behind a small reporter that stays silent in quiet mode,
//! so the orchestrator never branches on visibility itself.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_MILLIS: u64 = 90;

/// Progress reporter for the compile workflow
pub struct Progress {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl Progress {
    /// Create a reporter; a disabled one swallows every call
    pub fn new(enabled: bool) -> Self {
        Self { bar: None, enabled }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Show an indeterminate spinner while parsing the specification
    pub fn spinner(&mut self, message: &str) {
        if !self.enabled {
            return;
        }
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid template");
        let bar = ProgressBar::new_spinner().with_style(style).with_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(TICK_MILLIS));
        self.bar = Some(bar);
    }

    /// Track a fixed number of emit jobs
    pub fn start(&mut self, total: u64, message: &str) {
        if !self.enabled {
            return;
        }
        let style = ProgressStyle::default_bar()
            .template("{msg} {wide_bar:.green} {pos}/{len}")
            .expect("Invalid template");
        let bar = ProgressBar::new(total).with_style(style).with_message(message.to_string());
        self.bar = Some(bar);
    }

    /// Record one finished job
    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Replace the displayed message
    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Remove the current spinner or bar from the terminal
    pub fn finish_and_clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}
