//! Franchise identity resolution
//!
//! Team-season labels in the advanced-stats table carry a leading season
//! year and a playoff asterisk (e.g. "2016 Cleveland Cavaliers*"). This
//! module strips that decoration and resolves historical renames so every
//! label maps to the franchise name used by the team lookup table.

use std::sync::LazyLock;

use phf::phf_map;
use regex::{Captures, Regex};

pub use courtside_types::BOUNDS_LABEL;

/// Franchises that changed name or city inside the dataset's window.
/// Checked by exact match after decoration stripping; partial matches
/// never fire.
static HISTORICAL_RENAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "Charlotte Bobcats" => "Charlotte Hornets",
    "New Orleans Hornets" => "New Orleans Pelicans",
    "New Jersey Nets" => "Brooklyn Nets",
};

/// Standalone digit runs are season years and get removed, unless the
/// digits are the numeric part of a nickname written as "<digits> ers".
static SEASON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\b( ers\b)?").expect("season token pattern"));

/// Map a raw team-season label to its canonical franchise name.
///
/// Total and deterministic: unrecognized labels pass through unchanged
/// after decoration stripping. The Bounds sentinel is returned as-is;
/// callers building franchise lists must exclude it themselves (or use
/// [`selected_franchises`]).
pub fn normalize_label(label: &str) -> String {
    let stripped = label.replace('*', "");
    let cleaned = SEASON_TOKEN.replace_all(&stripped, |caps: &Captures<'_>| {
        if caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    let name = cleaned.trim();
    match HISTORICAL_RENAMES.get(name) {
        Some(renamed) => (*renamed).to_string(),
        None => name.to_string(),
    }
}

/// Normalize a label selection into the franchise list used for team-id
/// resolution: the Bounds sentinel is dropped and franchises appearing
/// through several seasons are kept once, in first-seen order.
pub fn selected_franchises<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = hashbrown::HashSet::new();
    let mut franchises = Vec::new();
    for label in labels {
        let name = normalize_label(label.as_ref());
        if name == BOUNDS_LABEL {
            continue;
        }
        if seen.insert(name.clone()) {
            franchises.push(name);
        }
    }
    franchises
}
