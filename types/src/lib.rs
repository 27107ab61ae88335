//! Shared types for COURTSIDE
//!
//! This crate contains the serializable selection, statistic, and chart
//! specification types that are shared between the data backend
//! (courtside-core) and whatever surface renders the charts.

use serde::{Deserialize, Serialize};

/// Synthetic team-season label whose row exists only to pin the
/// parallel-coordinates axis extents. Never a real franchise.
pub const BOUNDS_LABEL: &str = "Bounds";

// ─────────────────────────────────────────────────────────────────────────────
// Playoff Tiers
// ─────────────────────────────────────────────────────────────────────────────

/// How far a team went in the playoffs that season (1 = missed, 6 = title).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayoffTier {
    MissedPlayoffs = 1,
    MadeFirstRound = 2,
    MadeSecondRound = 3,
    MadeConferenceFinals = 4,
    MadeFinals = 5,
    WonFinals = 6,
}

impl PlayoffTier {
    pub const ALL: [PlayoffTier; 6] = [
        PlayoffTier::MissedPlayoffs,
        PlayoffTier::MadeFirstRound,
        PlayoffTier::MadeSecondRound,
        PlayoffTier::MadeConferenceFinals,
        PlayoffTier::MadeFinals,
        PlayoffTier::WonFinals,
    ];

    /// Numeric encoding used by the advanced-stats table.
    pub const fn value(&self) -> i64 {
        *self as i64
    }

    /// Legend text shown next to the parallel-coordinates chart.
    pub const fn label(&self) -> &'static str {
        match self {
            PlayoffTier::MissedPlayoffs => "Missed the Playoffs",
            PlayoffTier::MadeFirstRound => "Made the 1st Round",
            PlayoffTier::MadeSecondRound => "Made the 2nd Round",
            PlayoffTier::MadeConferenceFinals => "Made the Conference Finals",
            PlayoffTier::MadeFinals => "Made the NBA Finals",
            PlayoffTier::WonFinals => "Won the NBA Finals",
        }
    }

    pub fn from_value(value: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.value() == value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Line-Chart Statistics
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed y-axis bounds for a line-chart statistic, so switching between
/// statistics never visually rescales the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Per-season league statistic plotted on the line chart.
///
/// `NetRtg` is not stored in the source table; it is derived per row as
/// oRTG - dRTG when the table is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStat {
    WinPct,
    Ppg,
    Apg,
    Rpg,
    NetRtg,
    EfgPct,
    OppEfgPct,
    OffRtg,
    DefRtg,
}

impl LineStat {
    /// Every statistic that has a column identifier, display name and range.
    pub const ALL: [LineStat; 9] = [
        LineStat::WinPct,
        LineStat::Ppg,
        LineStat::Apg,
        LineStat::Rpg,
        LineStat::NetRtg,
        LineStat::EfgPct,
        LineStat::OppEfgPct,
        LineStat::OffRtg,
        LineStat::DefRtg,
    ];

    /// The statistics the dashboard selector exposes. Raw oRTG/dRTG stay
    /// addressable by column name but are not offered as choices.
    pub const SELECTOR: [LineStat; 7] = [
        LineStat::WinPct,
        LineStat::Ppg,
        LineStat::Apg,
        LineStat::Rpg,
        LineStat::NetRtg,
        LineStat::EfgPct,
        LineStat::OppEfgPct,
    ];

    /// Column identifier in the line-series table (netRTG is derived).
    pub const fn column(&self) -> &'static str {
        match self {
            LineStat::WinPct => "Win%",
            LineStat::Ppg => "PPG",
            LineStat::Apg => "APG",
            LineStat::Rpg => "RPG",
            LineStat::NetRtg => "netRTG",
            LineStat::EfgPct => "eFGPerc",
            LineStat::OppEfgPct => "OeFGPerc",
            LineStat::OffRtg => "oRTG",
            LineStat::DefRtg => "dRTG",
        }
    }

    /// Human-readable label used in chart titles.
    pub const fn display_name(&self) -> &'static str {
        match self {
            LineStat::WinPct => "Win %",
            LineStat::Ppg => "Points/gm",
            LineStat::Apg => "Assists/gm",
            LineStat::Rpg => "Rebounds/gm",
            LineStat::NetRtg => "Net Rating",
            LineStat::EfgPct => "Effective Field Goal %",
            LineStat::OppEfgPct => "Opposing Effective Field Goal %",
            LineStat::OffRtg => "Offensive Rating",
            LineStat::DefRtg => "Defensive Rating",
        }
    }

    /// Fixed y-axis bounds for this statistic.
    pub const fn axis_range(&self) -> AxisRange {
        match self {
            LineStat::WinPct => AxisRange { min: 0.2, max: 0.8 },
            LineStat::Ppg => AxisRange { min: 90.0, max: 120.0 },
            LineStat::Apg => AxisRange { min: 20.0, max: 28.0 },
            LineStat::Rpg => AxisRange { min: 40.0, max: 50.0 },
            LineStat::NetRtg => AxisRange { min: -10.0, max: 10.0 },
            LineStat::EfgPct => AxisRange { min: 0.44, max: 0.6 },
            LineStat::OppEfgPct => AxisRange { min: 0.44, max: 0.6 },
            LineStat::OffRtg => AxisRange { min: 95.0, max: 120.0 },
            LineStat::DefRtg => AxisRange { min: 95.0, max: 120.0 },
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.column() == column)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Box-Score Statistics (3D scatter view)
// ─────────────────────────────────────────────────────────────────────────────

/// Per-team aggregated box-score column, as named by the source system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxScoreStat {
    Min,
    Pts,
    Fgm,
    Fga,
    FgPct,
    Fg3m,
    Fg3a,
    Fg3Pct,
    Ftm,
    Fta,
    FtPct,
    Oreb,
    Dreb,
    Reb,
    Ast,
    Stl,
    Blk,
    Tov,
    Pf,
    PlusMinus,
}

impl BoxScoreStat {
    pub const COUNT: usize = 20;

    pub const ALL: [BoxScoreStat; Self::COUNT] = [
        BoxScoreStat::Min,
        BoxScoreStat::Pts,
        BoxScoreStat::Fgm,
        BoxScoreStat::Fga,
        BoxScoreStat::FgPct,
        BoxScoreStat::Fg3m,
        BoxScoreStat::Fg3a,
        BoxScoreStat::Fg3Pct,
        BoxScoreStat::Ftm,
        BoxScoreStat::Fta,
        BoxScoreStat::FtPct,
        BoxScoreStat::Oreb,
        BoxScoreStat::Dreb,
        BoxScoreStat::Reb,
        BoxScoreStat::Ast,
        BoxScoreStat::Stl,
        BoxScoreStat::Blk,
        BoxScoreStat::Tov,
        BoxScoreStat::Pf,
        BoxScoreStat::PlusMinus,
    ];

    /// Column header in the box-score table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BoxScoreStat::Min => "MIN",
            BoxScoreStat::Pts => "PTS",
            BoxScoreStat::Fgm => "FGM",
            BoxScoreStat::Fga => "FGA",
            BoxScoreStat::FgPct => "FG_PCT",
            BoxScoreStat::Fg3m => "FG3M",
            BoxScoreStat::Fg3a => "FG3A",
            BoxScoreStat::Fg3Pct => "FG3_PCT",
            BoxScoreStat::Ftm => "FTM",
            BoxScoreStat::Fta => "FTA",
            BoxScoreStat::FtPct => "FT_PCT",
            BoxScoreStat::Oreb => "OREB",
            BoxScoreStat::Dreb => "DREB",
            BoxScoreStat::Reb => "REB",
            BoxScoreStat::Ast => "AST",
            BoxScoreStat::Stl => "STL",
            BoxScoreStat::Blk => "BLK",
            BoxScoreStat::Tov => "TOV",
            BoxScoreStat::Pf => "PF",
            BoxScoreStat::PlusMinus => "PLUS_MINUS",
        }
    }

    /// Position of this column in the loaded stats array.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or_default()
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == column)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parallel-Coordinates Dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// The seven advanced-stats dimensions tracked by the parallel-coordinates
/// chart, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvancedDim {
    OppEfgPct,
    DefRating,
    WinPct,
    NetRating,
    OffRating,
    EfgPct,
    TrueShootingPct,
}

impl AdvancedDim {
    pub const COUNT: usize = 7;

    pub const ALL: [AdvancedDim; Self::COUNT] = [
        AdvancedDim::OppEfgPct,
        AdvancedDim::DefRating,
        AdvancedDim::WinPct,
        AdvancedDim::NetRating,
        AdvancedDim::OffRating,
        AdvancedDim::EfgPct,
        AdvancedDim::TrueShootingPct,
    ];

    /// Column header in the advanced-stats table.
    pub const fn column(&self) -> &'static str {
        match self {
            AdvancedDim::OppEfgPct => "o_eFG%",
            AdvancedDim::DefRating => "DRtg",
            AdvancedDim::WinPct => "W%",
            AdvancedDim::NetRating => "NRtg",
            AdvancedDim::OffRating => "ORtg",
            AdvancedDim::EfgPct => "eFG%",
            AdvancedDim::TrueShootingPct => "TS%",
        }
    }

    /// Position of this dimension in the loaded dims array.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).unwrap_or_default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Season Result (line-chart series)
// ─────────────────────────────────────────────────────────────────────────────

/// Categorical outcome attached to each line-series row; each value gets
/// its own colored series on the line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonResult {
    MadePlayoffs,
    MissedPlayoffs,
}

impl SeasonResult {
    pub const ALL: [SeasonResult; 2] = [SeasonResult::MadePlayoffs, SeasonResult::MissedPlayoffs];

    /// Value as it appears in the line-series table's Result column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SeasonResult::MadePlayoffs => "Made Playoffs",
            SeasonResult::MissedPlayoffs => "Missed Playoffs",
        }
    }

    /// Series color on the line chart.
    pub const fn color(&self) -> &'static str {
        match self {
            SeasonResult::MadePlayoffs => "green",
            SeasonResult::MissedPlayoffs => "red",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == label)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection State
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the user has currently selected. Rebuilt on every
/// interaction and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Selected playoff-performance tiers. Empty means "all tiers
    /// present in the table".
    #[serde(default)]
    pub tiers: Vec<PlayoffTier>,
    /// When on, an empty label selection defaults to every team-season
    /// label; when off it defaults to the Bounds sentinel only.
    #[serde(default)]
    pub select_all_teams: bool,
    /// Explicitly selected team-season labels.
    #[serde(default)]
    pub team_labels: Vec<String>,
    /// Statistic shown on the line chart.
    #[serde(default = "default_line_stat")]
    pub line_stat: LineStat,
    /// Box-score statistics for the 3D view; exactly three are required
    /// for the view to render.
    #[serde(default = "default_scatter_stats")]
    pub scatter_stats: Vec<BoxScoreStat>,
}

fn default_line_stat() -> LineStat {
    LineStat::WinPct
}

fn default_scatter_stats() -> Vec<BoxScoreStat> {
    vec![BoxScoreStat::Ast, BoxScoreStat::FgPct, BoxScoreStat::PlusMinus]
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            tiers: Vec::new(),
            select_all_teams: false,
            team_labels: Vec::new(),
            line_stat: default_line_stat(),
            scatter_stats: default_scatter_stats(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chart Specifications
// ─────────────────────────────────────────────────────────────────────────────

/// Diverging color scale anchored on a midpoint tier value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Named palette understood by the renderer.
    pub palette: String,
    pub midpoint: f64,
}

/// One vertical axis of the parallel-coordinates chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionTrack {
    /// Source column header, also used as the axis label.
    pub column: String,
    /// One value per plotted row, in row order.
    pub values: Vec<f64>,
}

/// Renderer-ready parallel-coordinates chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelCoordsSpec {
    pub title: String,
    pub dimensions: Vec<DimensionTrack>,
    /// Playoff tier per row, drives the line color.
    pub color_values: Vec<f64>,
    pub color_scale: ColorScale,
}

/// A single (year, value) point on the line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub year: i64,
    pub value: f64,
}

/// One colored series of the line chart (one per season result).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub result: SeasonResult,
    pub color: String,
    pub points: Vec<LinePoint>,
}

/// Renderer-ready multi-series line chart with a fixed y-domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSpec {
    pub title: String,
    pub stat: LineStat,
    /// Fixed so toggling statistics never rescales the chart.
    pub y_domain: AxisRange,
    pub series: Vec<LineSeries>,
}

/// Marker used for one class of scatter points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub symbol: String,
    pub color: String,
}

/// A single point of the 3D scatter view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub champion: bool,
}

/// Renderer-ready 3D scatter chart of playoff-team box scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter3dSpec {
    /// Axis labels for x, y, z in order.
    pub axes: [String; 3],
    pub points: Vec<ScatterPoint>,
    pub champion_marker: MarkerStyle,
    pub regular_marker: MarkerStyle,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_values_round_trip() {
        for tier in PlayoffTier::ALL {
            assert_eq!(PlayoffTier::from_value(tier.value()), Some(tier));
        }
        assert_eq!(PlayoffTier::from_value(0), None);
        assert_eq!(PlayoffTier::from_value(7), None);
    }

    #[test]
    fn tier_legend_matches_encoding() {
        assert_eq!(PlayoffTier::MissedPlayoffs.value(), 1);
        assert_eq!(PlayoffTier::WonFinals.value(), 6);
        assert_eq!(PlayoffTier::WonFinals.label(), "Won the NBA Finals");
    }

    #[test]
    fn line_stat_ranges_are_ordered() {
        for stat in LineStat::ALL {
            let range = stat.axis_range();
            assert!(range.min < range.max, "{:?}", stat);
        }
    }

    #[test]
    fn line_stat_selector_excludes_raw_ratings() {
        assert!(!LineStat::SELECTOR.contains(&LineStat::OffRtg));
        assert!(!LineStat::SELECTOR.contains(&LineStat::DefRtg));
        assert!(LineStat::SELECTOR.contains(&LineStat::NetRtg));
    }

    #[test]
    fn box_score_columns_resolve_by_header() {
        assert_eq!(
            BoxScoreStat::from_column("PLUS_MINUS"),
            Some(BoxScoreStat::PlusMinus)
        );
        assert_eq!(BoxScoreStat::from_column("DUNKS"), None);
        for (i, stat) in BoxScoreStat::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }

    #[test]
    fn default_selection_matches_dashboard_defaults() {
        let selection = SelectionState::default();
        assert!(selection.tiers.is_empty());
        assert!(!selection.select_all_teams);
        assert_eq!(selection.line_stat, LineStat::WinPct);
        assert_eq!(
            selection.scatter_stats,
            vec![BoxScoreStat::Ast, BoxScoreStat::FgPct, BoxScoreStat::PlusMinus]
        );
    }

    #[test]
    fn season_result_parses_table_labels() {
        assert_eq!(
            SeasonResult::from_label("Made Playoffs"),
            Some(SeasonResult::MadePlayoffs)
        );
        assert_eq!(SeasonResult::from_label("made playoffs"), None);
    }
}
