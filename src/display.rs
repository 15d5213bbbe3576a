//! Terminal rendering for the planet table and summary statistics.
//!
//! Functions return `String`s so callers decide where output goes; color is
//! an explicit option rather than global state.

use crate::planet::{PlanetRecord, RadiusBucket, SizeClass};
use crate::stats::Statistics;
use colored::Colorize;

pub const DEFAULT_LIMIT: usize = 10;
const RULE_WIDTH: usize = 90;

#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub limit: usize,
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            color: false,
        }
    }
}

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Render at most `options.limit` records, framed by dashed rules.
pub fn render_table(records: &[PlanetRecord], options: DisplayOptions) -> String {
    let shown = records.len().min(options.limit);
    let title = format!("Top {} Results:", shown);

    let mut lines = Vec::with_capacity(shown + 3);
    lines.push(format!(
        "🪐 {}",
        if options.color {
            title.bold().to_string()
        } else {
            title
        }
    ));
    lines.push(rule());
    lines.extend(records.iter().take(shown).map(|p| render_row(p, options.color)));
    lines.push(rule());
    lines.join("\n")
}

pub fn render_row(planet: &PlanetRecord, color: bool) -> String {
    let size = planet.size_class();
    let name = format!("{:<25}", planet.name);
    let label = size.label();

    let (name, label) = if color {
        let label = match size {
            SizeClass::EarthLike => label.green().to_string(),
            SizeClass::Intermediate => label.cyan().to_string(),
            SizeClass::GasGiantLike => label.yellow().to_string(),
        };
        (name.bold().to_string(), label)
    } else {
        (name, label.to_string())
    };

    format!(
        "{} {} | Host: {:<20} | Year: {:>4} | Radius: {:>5.2}⊕ | Dist: {:>6.1} pc | {}",
        size.icon(),
        name,
        planet.host,
        planet.disc_year,
        planet.radius,
        planet.distance,
        label
    )
}

fn percent_text(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| "N/A".to_string())
}

fn mean_text(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{:.2} {}", v, unit))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn render_statistics(stats: &Statistics, color: bool) -> String {
    let heading = format!("Statistics ({} planets):", stats.total);
    let heading = if color {
        heading.bold().to_string()
    } else {
        heading
    };

    let bucket_line = |icon: &str, label: &str, bucket: RadiusBucket| {
        format!(
            "   {} {}: {} ({})",
            icon,
            label,
            stats.count(bucket),
            percent_text(stats.percent(bucket))
        )
    };

    [
        format!("📈 {}", heading),
        bucket_line("🌍", "Earth-like", RadiusBucket::EarthLike),
        bucket_line("🌏", "Super-Earths", RadiusBucket::SuperEarth),
        bucket_line("🪐", "Gas Giants", RadiusBucket::GasGiant),
        format!(
            "   📏 Avg radius: {}",
            mean_text(stats.mean_radius(), "Earth radii")
        ),
        format!(
            "   ⚖️  Avg mass: {}",
            mean_text(stats.mean_mass(), "Earth masses")
        ),
    ]
    .join("\n")
}
