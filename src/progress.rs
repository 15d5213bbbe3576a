//! Spinner shown while waiting on the archive.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Steady spinner on a TTY, hidden otherwise.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());
    if !is_tty {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
