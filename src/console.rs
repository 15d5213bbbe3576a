//! Line-oriented terminal I/O.
//!
//! [`Console`] wraps any reader/writer pair so interactive questions can be
//! answered from a buffer in tests instead of a real terminal.

use crate::query::SortKey;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Print `question` without a newline and read one trimmed line.
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }

    pub fn ask_search(&mut self) -> io::Result<String> {
        self.ask("🔍 Search for a planet/star (or press Enter to skip): ")
    }

    /// Show the sort menu. An unrecognized answer yields `None` after a warning.
    pub fn ask_sort(&mut self) -> io::Result<Option<SortKey>> {
        self.println("📊 Choose sorting:")?;
        for (i, key) in SortKey::ALL.iter().enumerate() {
            self.println(&format!("{}. {}", i + 1, key.menu_label()))?;
        }
        self.blank()?;

        let answer = self.ask("➤ Enter choice (1-4): ")?;
        let key = SortKey::from_menu_choice(&answer);
        if key.is_none() {
            tracing::warn!(choice = %answer, "unrecognized sort choice");
            self.println("Invalid choice, keeping archive order")?;
        }
        Ok(key)
    }

    pub fn confirm_save(&mut self) -> io::Result<bool> {
        let answer = self.ask("💾 Save results to file? (y/n): ")?;
        Ok(answer == "y" || answer == "Y")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
