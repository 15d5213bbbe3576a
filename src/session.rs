//! One pass over decoded records: filter, sort, list, summarize, save.

use crate::console::Console;
use crate::display::{self, DisplayOptions, DEFAULT_LIMIT};
use crate::error::Result;
use crate::planet::PlanetRecord;
use crate::query::{self, SortKey};
use crate::report::{self, DEFAULT_REPORT_FILE};
use crate::stats::Statistics;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What the user asked for. Anything left unset is asked for when
/// `interactive` is true and skipped otherwise.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub limit: usize,
    /// Save without asking.
    pub save: bool,
    pub output: PathBuf,
    pub interactive: bool,
    pub color: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            search: None,
            sort: None,
            limit: DEFAULT_LIMIT,
            save: false,
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            interactive: false,
            color: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed {
        total: usize,
        shown: usize,
        saved: Option<PathBuf>,
    },
    NoMatches {
        search: String,
        suggestion: Option<String>,
    },
}

pub struct Session<R, W> {
    console: Console<R, W>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, options: SessionOptions) -> Self {
        Self { console, options }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn success(&self, msg: &str) -> String {
        if self.options.color {
            format!("{} {}", "✓".green(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    fn failure(&self, msg: &str) -> String {
        if self.options.color {
            format!("{} {}", "✗".red(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    pub fn run(&mut self, mut records: Vec<PlanetRecord>) -> Result<Outcome> {
        let line = self.success(&format!("Loaded {} exoplanets!", records.len()));
        self.console.println(&line)?;
        self.console.blank()?;

        let search = match self.options.search.clone() {
            Some(search) => search,
            None if self.options.interactive => self.console.ask_search()?,
            None => String::new(),
        };

        if !search.trim().is_empty() {
            // Suggestions need the unfiltered names
            let suggestion = query::suggest_name(&records, &search).map(str::to_string);

            if query::filter_records(&mut records, &search) == 0 {
                let line = self.failure("No matches found!");
                self.console.println(&line)?;
                if let Some(name) = &suggestion {
                    self.console.println(&format!("  Did you mean '{}'?", name))?;
                }
                return Ok(Outcome::NoMatches { search, suggestion });
            }

            let line = self.success(&format!("Found {} matches!", records.len()));
            self.console.println(&line)?;
            self.console.blank()?;
        }

        let sort = match self.options.sort {
            Some(key) => Some(key),
            None if self.options.interactive => self.console.ask_sort()?,
            None => None,
        };
        if let Some(key) = sort {
            query::sort_records(&mut records, key);
        }

        let display_options = DisplayOptions {
            limit: self.options.limit,
            color: self.options.color,
        };
        self.console.blank()?;
        self.console
            .println(&display::render_table(&records, display_options))?;

        let stats = Statistics::compute(&records);
        self.console.blank()?;
        self.console
            .println(&display::render_statistics(&stats, self.options.color))?;

        let save = if self.options.save {
            true
        } else if self.options.interactive {
            self.console.blank()?;
            self.console.confirm_save()?
        } else {
            false
        };

        let saved = if save { self.save(&records)? } else { None };

        Ok(Outcome::Completed {
            total: records.len(),
            shown: records.len().min(self.options.limit),
            saved,
        })
    }

    /// A failed write is reported, not propagated.
    fn save(&mut self, records: &[PlanetRecord]) -> Result<Option<PathBuf>> {
        let path = self.options.output.clone();
        match report::write_report(&path, records) {
            Ok(()) => {
                let line = self.success(&format!("Saved to {}", path.display()));
                self.console.println(&line)?;
                Ok(Some(path))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save report");
                let line = self.failure(&e.to_string());
                self.console.println(&line)?;
                Ok(None)
            }
        }
    }
}
