//! # Lintstart Step Progress
//!
//! File: cli/src/common/ui/progress.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `ProgressReporter` renders the `[n/N] [████░░░░] 50% message` step counter
//! printed before each pipeline step. When stderr is a terminal an `indicatif`
//! bar tracks the same position at the bottom of the screen; otherwise the bar
//! is hidden and only the plain step lines are printed.
//!
use indicatif::{ProgressBar, ProgressStyle};

const BAR_WIDTH: usize = 20;

/// Step counter for a fixed list of pipeline steps.
pub struct ProgressReporter {
    total: usize,
    current: usize,
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Creates a reporter drawing an `indicatif` bar on stderr (hidden if not a terminal).
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:20.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█░"),
        );
        Self {
            total,
            current: 0,
            bar,
        }
    }

    /// Creates a reporter that never draws a bar.
    pub fn hidden(total: usize) -> Self {
        Self {
            total,
            current: 0,
            bar: ProgressBar::hidden(),
        }
    }

    /// Advances to the next step and prints its line. Returns the printed line.
    pub fn next_step(&mut self, message: &str) -> String {
        self.current = (self.current + 1).min(self.total);
        let line = render_step_line(self.current, self.total, message);
        self.bar.set_position(self.current as u64);
        self.bar.set_message(message.to_string());
        if self.bar.is_hidden() {
            println!("\n{}", line);
        } else {
            self.bar.println(format!("\n{}", line));
        }
        line
    }

    /// Clears the bar and prints the completion banner.
    pub fn complete(&self) {
        self.bar.finish_and_clear();
        println!("\n🎉 Setup complete! All steps finished successfully.");
    }

    /// Clears the bar without the completion banner (used on failure).
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

/// Renders `[current/total] [bar] pct% message`.
pub fn render_step_line(current: usize, total: usize, message: &str) -> String {
    let percent = if total == 0 {
        100
    } else {
        ((current as f64 / total as f64) * 100.0).round() as usize
    };
    format!("[{}/{}] {} {}", current, total, render_bar(percent), message)
}

/// Renders a fixed-width bar for `percent` (0..=100), e.g. `[█████░░░░░] 50%`.
pub fn render_bar(percent: usize) -> String {
    let percent = percent.min(100);
    let filled = ((percent as f64 / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}
