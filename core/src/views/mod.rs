//! View assembly
//!
//! Every user interaction recomputes the three chart specifications from
//! the immutable tables and the current selection. There is no caching
//! and no shared mutable state; `render` is a pure function of its
//! inputs.

mod error;
mod line_chart;
mod parallel;
mod scatter;

use tracing::debug;

use courtside_types::{
    BOUNDS_LABEL, LineChartSpec, ParallelCoordsSpec, PlayoffTier, Scatter3dSpec, SelectionState,
};

use crate::datasets::{AdvancedRow, Tables};
use crate::franchise::selected_franchises;

pub use error::{LookupError, SelectionError, ViewError};

/// One full recomputation of the dashboard. The scatter slot carries its
/// own error so a bad dimension selection or lookup fault halts only
/// that view.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub parallel: ParallelCoordsSpec,
    pub line: LineChartSpec,
    pub scatter: Result<Scatter3dSpec, ViewError>,
}

/// Tier selection with the all-select default applied: an empty explicit
/// selection means every tier present in the table.
pub fn effective_tiers(selection: &SelectionState, inventory: &[PlayoffTier]) -> Vec<PlayoffTier> {
    if selection.tiers.is_empty() {
        inventory.to_vec()
    } else {
        selection.tiers.clone()
    }
}

/// Label selection with the checkbox-dependent default applied: with no
/// explicit selection, "select all teams" yields the full inventory and
/// the unchecked state yields the Bounds sentinel only, so an untouched
/// chart shows no real team lines.
pub fn effective_labels(selection: &SelectionState, inventory: &[String]) -> Vec<String> {
    if !selection.team_labels.is_empty() {
        selection.team_labels.clone()
    } else if selection.select_all_teams {
        inventory.to_vec()
    } else {
        vec![BOUNDS_LABEL.to_string()]
    }
}

/// Row subset of the advanced table: tier in the selected tier set AND
/// label in the selected label set. Source order is preserved and rows
/// are borrowed, never copied.
pub fn filter_advanced<'a>(
    rows: &'a [AdvancedRow],
    tiers: &[PlayoffTier],
    labels: &[String],
) -> Vec<&'a AdvancedRow> {
    let tier_set: hashbrown::HashSet<PlayoffTier> = tiers.iter().copied().collect();
    let label_set: hashbrown::HashSet<&str> = labels.iter().map(String::as_str).collect();
    rows.iter()
        .filter(|row| tier_set.contains(&row.tier) && label_set.contains(row.label.as_str()))
        .collect()
}

/// Recompute all three views for the current selection.
pub fn render(tables: &Tables, selection: &SelectionState) -> DashboardView {
    let tiers = effective_tiers(selection, &tables.tier_inventory());
    let labels = effective_labels(selection, &tables.label_inventory());

    let filtered = filter_advanced(&tables.advanced, &tiers, &labels);
    debug!(
        rows = filtered.len(),
        tiers = tiers.len(),
        labels = labels.len(),
        "advanced view recomputed"
    );

    DashboardView {
        parallel: parallel::build(&filtered),
        line: line_chart::build(&tables.line_series, selection.line_stat),
        scatter: scatter_view(tables, selection, &labels),
    }
}

fn scatter_view(
    tables: &Tables,
    selection: &SelectionState,
    labels: &[String],
) -> Result<Scatter3dSpec, ViewError> {
    let stats = scatter::selected_stats(&selection.scatter_stats)?;
    let franchises = selected_franchises(labels);
    let rows = scatter::team_rows(&tables.box_scores, &tables.team_lookup, &franchises)?;
    Ok(scatter::build(&rows, stats, !franchises.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_types::{AdvancedDim, BoxScoreStat};
    use crate::datasets::{BoxScoreRow, TeamLookup};

    fn advanced_row(label: &str, tier: PlayoffTier) -> AdvancedRow {
        AdvancedRow::new(label.to_string(), tier, [0.0; AdvancedDim::COUNT])
    }

    fn tables() -> Tables {
        Tables {
            advanced: vec![
                advanced_row(BOUNDS_LABEL, PlayoffTier::MissedPlayoffs),
                advanced_row(BOUNDS_LABEL, PlayoffTier::WonFinals),
                advanced_row("2016 Cleveland Cavaliers*", PlayoffTier::WonFinals),
                advanced_row("2016 Golden State Warriors*", PlayoffTier::MadeFinals),
                advanced_row("2014 Charlotte Bobcats*", PlayoffTier::MadeFirstRound),
            ],
            line_series: Vec::new(),
            box_scores: vec![
                BoxScoreRow::new(1, true, [1.0; BoxScoreStat::COUNT]),
                BoxScoreRow::new(2, false, [2.0; BoxScoreStat::COUNT]),
            ],
            team_lookup: TeamLookup::from_entries([
                ("Cleveland Cavaliers".to_string(), 1),
                ("Golden State Warriors".to_string(), 2),
                ("Charlotte Hornets".to_string(), 3),
            ]),
        }
    }

    #[test]
    fn champion_tier_with_all_labels_keeps_only_champion_rows() {
        let tables = tables();
        let labels = tables.label_inventory();
        let filtered = filter_advanced(&tables.advanced, &[PlayoffTier::WonFinals], &labels);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.tier == PlayoffTier::WonFinals));
    }

    #[test]
    fn default_selection_shows_exactly_the_bounds_rows() {
        let tables = tables();
        let selection = SelectionState::default();

        let tiers = effective_tiers(&selection, &tables.tier_inventory());
        let labels = effective_labels(&selection, &tables.label_inventory());
        let filtered = filter_advanced(&tables.advanced, &tiers, &labels);

        assert_eq!(labels, vec![BOUNDS_LABEL.to_string()]);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.label == BOUNDS_LABEL));
    }

    #[test]
    fn select_all_teams_defaults_to_full_inventory() {
        let tables = tables();
        let selection = SelectionState {
            select_all_teams: true,
            ..SelectionState::default()
        };
        let labels = effective_labels(&selection, &tables.label_inventory());
        assert_eq!(labels, tables.label_inventory());
    }

    #[test]
    fn explicit_labels_override_the_checkbox_default() {
        let tables = tables();
        let selection = SelectionState {
            team_labels: vec!["2016 Cleveland Cavaliers*".to_string()],
            ..SelectionState::default()
        };
        let labels = effective_labels(&selection, &tables.label_inventory());
        assert_eq!(labels, vec!["2016 Cleveland Cavaliers*".to_string()]);
    }

    #[test]
    fn render_with_default_selection_scatters_every_team() {
        let tables = tables();
        let view = render(&tables, &SelectionState::default());

        // Bounds-only label default: no franchises selected, so the 3D
        // view falls back to the whole box-score table.
        let scatter = view.scatter.expect("scatter renders");
        assert_eq!(scatter.points.len(), 2);
        assert_eq!(view.parallel.color_values.len(), 2);
    }

    #[test]
    fn render_resolves_selected_seasons_to_team_rows() {
        let tables = tables();
        let selection = SelectionState {
            team_labels: vec![
                BOUNDS_LABEL.to_string(),
                "2016 Cleveland Cavaliers*".to_string(),
            ],
            ..SelectionState::default()
        };
        let view = render(&tables, &selection);
        let scatter = view.scatter.expect("scatter renders");

        assert_eq!(scatter.points.len(), 1);
        assert!(scatter.points[0].champion);
        assert!(scatter.caption.contains("Selected Teams"));
    }

    #[test]
    fn bad_dimension_count_halts_only_the_scatter_view() {
        let tables = tables();
        let selection = SelectionState {
            scatter_stats: vec![BoxScoreStat::Ast, BoxScoreStat::Pts],
            ..SelectionState::default()
        };
        let view = render(&tables, &selection);

        assert_eq!(
            view.scatter,
            Err(ViewError::Selection(SelectionError::DimensionCount {
                selected: 2
            }))
        );
        // The other views still rendered.
        assert_eq!(view.parallel.dimensions.len(), AdvancedDim::COUNT);
        assert_eq!(view.line.series.len(), 2);
    }

    #[test]
    fn renamed_franchise_resolves_through_the_lookup() {
        let tables = tables();
        let selection = SelectionState {
            team_labels: vec!["2014 Charlotte Bobcats*".to_string()],
            ..SelectionState::default()
        };
        let view = render(&tables, &selection);

        // Bobcats normalize to Charlotte Hornets (team 3), which has no
        // box-score rows here; still a successful, empty view.
        let scatter = view.scatter.expect("scatter renders");
        assert!(scatter.points.is_empty());
    }

    #[test]
    fn missing_lookup_entry_is_a_lookup_error() {
        let mut tables = tables();
        tables.team_lookup = TeamLookup::from_entries([("Cleveland Cavaliers".to_string(), 1)]);
        let selection = SelectionState {
            team_labels: vec!["2016 Golden State Warriors*".to_string()],
            ..SelectionState::default()
        };
        let view = render(&tables, &selection);

        assert_eq!(
            view.scatter,
            Err(ViewError::Lookup(LookupError::UnknownFranchise {
                name: "Golden State Warriors".to_string()
            }))
        );
    }
}
