//! Library interface for exoscan (exo), a NASA Exoplanet Archive explorer
//!
//! Exposes the fetch/decode/transform/present pipeline so it can be driven
//! without a terminal.

pub mod api;
pub mod colors;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod planet;
pub mod progress;
pub mod query;
pub mod report;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use api::{ArchiveApi, ArchiveClient};
pub use config::Config;
pub use console::Console;
pub use error::{ExoError, Result};
pub use planet::{PlanetRecord, RadiusBucket, SizeClass};
pub use query::{SortKey, filter_records, sort_records};
pub use session::{Outcome, Session, SessionOptions};
pub use stats::Statistics;
