//! Plain-text report of the full result list.

use crate::error::{ExoError, Result};
use crate::planet::PlanetRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

pub const DEFAULT_REPORT_FILE: &str = "exoplanets_results.txt";

/// Render every record (not just the displayed ones) as labeled blocks.
pub fn render_report(records: &[PlanetRecord], generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        "NASA Exoplanet Search Results".to_string(),
        "=".repeat(80),
        format!(
            "Generated: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        String::new(),
    ];

    for p in records {
        lines.extend([
            format!("Planet: {}", p.name),
            format!("  Host Star: {}", p.host),
            format!("  Discovery Year: {}", p.disc_year),
            format!("  Mass: {:.2} Earth masses", p.mass),
            format!("  Radius: {:.2} Earth radii", p.radius),
            format!("  Distance: {:.1} parsecs", p.distance),
            String::new(),
        ]);
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, records: &[PlanetRecord]) -> Result<()> {
    let contents = render_report(records, Utc::now());
    std::fs::write(path, contents).map_err(|source| ExoError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote report");
    Ok(())
}
