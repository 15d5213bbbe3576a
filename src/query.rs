//! Search and ordering over decoded records.

use crate::planet::PlanetRecord;
use std::cmp::Ordering;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Keep only records whose planet or host name contains `search`, ignoring case.
///
/// A blank search keeps everything. Returns the number of records kept.
pub fn filter_records(records: &mut Vec<PlanetRecord>, search: &str) -> usize {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return records.len();
    }

    records.retain(|p| matches_search(p, &needle));
    tracing::debug!(query = %needle, kept = records.len(), "filtered records");
    records.len()
}

fn matches_search(planet: &PlanetRecord, needle_lower: &str) -> bool {
    planet.name.to_lowercase().contains(needle_lower)
        || planet.host.to_lowercase().contains(needle_lower)
}

/// Closest planet or host name to `search`, if any is reasonably similar.
pub fn suggest_name<'a>(records: &'a [PlanetRecord], search: &str) -> Option<&'a str> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    records
        .iter()
        .flat_map(|p| [p.name.as_str(), p.host.as_str()])
        .filter(|name| !name.is_empty())
        .map(|name| (name, strsim::jaro_winkler(&needle, &name.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}

/// Ordering applied to the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Planet name, A-Z
    Name,
    /// Discovery year, newest first
    Year,
    /// Radius, largest first
    Radius,
    /// Distance, closest first
    Distance,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Year,
        SortKey::Radius,
        SortKey::Distance,
    ];

    /// Map an interactive menu answer ("1".."4") to a key.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(SortKey::Name),
            "2" => Some(SortKey::Year),
            "3" => Some(SortKey::Radius),
            "4" => Some(SortKey::Distance),
            _ => None,
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            SortKey::Name => "By name (A-Z)",
            SortKey::Year => "By discovery year (newest first)",
            SortKey::Radius => "By size (largest first)",
            SortKey::Distance => "By distance (closest first)",
        }
    }

    pub fn compare(self, a: &PlanetRecord, b: &PlanetRecord) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Year => b.disc_year.cmp(&a.disc_year),
            SortKey::Radius => b.radius.total_cmp(&a.radius),
            SortKey::Distance => a.distance.total_cmp(&b.distance),
        }
    }
}

/// Stable in-place sort; ties keep their decode order.
pub fn sort_records(records: &mut [PlanetRecord], key: SortKey) {
    records.sort_by(|a, b| key.compare(a, b));
    tracing::debug!(?key, count = records.len(), "sorted records");
}
