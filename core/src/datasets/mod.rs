//! Startup dataset ingestion
//!
//! The four source tables are loaded once at process start through a
//! DataFusion session and held as plain row vectors for the lifetime of
//! the process. Nothing mutates them afterwards; every view recomputes
//! from these tables on each interaction.

mod column_helpers;
mod error;
mod loader;

use serde::Deserialize;

use courtside_types::{AdvancedDim, BoxScoreStat, LineStat, PlayoffTier, SeasonResult};

pub use error::DatasetError;
pub use loader::load_tables;

/// Source-system team key, joining the lookup table to box-score rows.
pub type TeamId = i64;

// ─────────────────────────────────────────────────────────────────────────────
// Rows
// ─────────────────────────────────────────────────────────────────────────────

/// One (season, franchise) row of the advanced-stats table.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedRow {
    /// Team-season label, e.g. "2016 Cleveland Cavaliers*". The Bounds
    /// sentinel rows appear here too.
    pub label: String,
    pub tier: PlayoffTier,
    dims: [f64; AdvancedDim::COUNT],
}

impl AdvancedRow {
    pub fn new(label: String, tier: PlayoffTier, dims: [f64; AdvancedDim::COUNT]) -> Self {
        Self { label, tier, dims }
    }

    pub fn dim(&self, dim: AdvancedDim) -> f64 {
        self.dims[dim.index()]
    }
}

/// One league-average season of the line-series table.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesRow {
    pub year: i64,
    pub win_pct: f64,
    pub ppg: f64,
    pub apg: f64,
    pub rpg: f64,
    pub off_rtg: f64,
    pub def_rtg: f64,
    pub efg_pct: f64,
    pub opp_efg_pct: f64,
    /// Derived at load time as oRTG - dRTG; not stored in the source.
    pub net_rtg: f64,
    pub result: SeasonResult,
}

impl LineSeriesRow {
    pub fn stat(&self, stat: LineStat) -> f64 {
        match stat {
            LineStat::WinPct => self.win_pct,
            LineStat::Ppg => self.ppg,
            LineStat::Apg => self.apg,
            LineStat::Rpg => self.rpg,
            LineStat::NetRtg => self.net_rtg,
            LineStat::EfgPct => self.efg_pct,
            LineStat::OppEfgPct => self.opp_efg_pct,
            LineStat::OffRtg => self.off_rtg,
            LineStat::DefRtg => self.def_rtg,
        }
    }
}

/// One playoff-appearance row of the per-team box-score table.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScoreRow {
    pub team_id: TeamId,
    /// True when this appearance ended in a championship.
    pub champion: bool,
    stats: [f64; BoxScoreStat::COUNT],
}

impl BoxScoreRow {
    pub fn new(team_id: TeamId, champion: bool, stats: [f64; BoxScoreStat::COUNT]) -> Self {
        Self {
            team_id,
            champion,
            stats,
        }
    }

    pub fn stat(&self, stat: BoxScoreStat) -> f64 {
        self.stats[stat.index()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Team Lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Mapping from canonical franchise name to the source-system team id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamLookup(hashbrown::HashMap<String, TeamId>);

impl TeamLookup {
    pub fn team_id(&self, franchise: &str) -> Option<TeamId> {
        self.0.get(franchise).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, TeamId)>,
    {
        Self(entries.into_iter().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

/// All startup-loaded tables. Read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub advanced: Vec<AdvancedRow>,
    pub line_series: Vec<LineSeriesRow>,
    pub box_scores: Vec<BoxScoreRow>,
    pub team_lookup: TeamLookup,
}

impl Tables {
    /// Distinct team-season labels in first-seen order (the selector
    /// inventory; includes the Bounds sentinel).
    pub fn label_inventory(&self) -> Vec<String> {
        let mut seen = hashbrown::HashSet::new();
        let mut labels = Vec::new();
        for row in &self.advanced {
            if seen.insert(row.label.as_str()) {
                labels.push(row.label.clone());
            }
        }
        labels
    }

    /// Distinct playoff tiers present in the advanced table, sorted.
    pub fn tier_inventory(&self) -> Vec<PlayoffTier> {
        let mut tiers: Vec<PlayoffTier> = Vec::new();
        for row in &self.advanced {
            if !tiers.contains(&row.tier) {
                tiers.push(row.tier);
            }
        }
        tiers.sort();
        tiers
    }
}
