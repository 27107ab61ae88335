//! 3D scatter view of per-team playoff box scores.

use courtside_types::{BoxScoreStat, MarkerStyle, Scatter3dSpec, ScatterPoint};

use super::error::{LookupError, SelectionError};
use crate::datasets::{BoxScoreRow, TeamLookup};

const CHAMPION_SYMBOL: &str = "^";
const CHAMPION_COLOR: &str = "green";
const REGULAR_SYMBOL: &str = "o";
const REGULAR_COLOR: &str = "#fe7c73";

const ALL_TEAMS_CAPTION: &str = "Historical 3D Scatter Plot of All NBA Playoff Teams \
     (2010-2022). Green Hat denotes Championship. Red Circle denotes Lost.";
const SELECTED_TEAMS_CAPTION: &str = "Historical 3D Scatter Plot by Selected Teams from \
     2010-2022 Playoffs. Green Hat denotes Championship. Red Circle denotes Lost.";

/// Validate the 3D dimension selection: exactly three statistics.
pub(super) fn selected_stats(stats: &[BoxScoreStat]) -> Result<[BoxScoreStat; 3], SelectionError> {
    match stats {
        [x, y, z] => Ok([*x, *y, *z]),
        other => Err(SelectionError::DimensionCount {
            selected: other.len(),
        }),
    }
}

/// Resolve the selected franchises to box-score rows.
///
/// An empty franchise list means "no team filter": the whole table is
/// returned. Otherwise the result is the union of each franchise's rows
/// in selection order; a franchise absent from the lookup table is a
/// [`LookupError`], never silently skipped.
pub(super) fn team_rows<'a>(
    rows: &'a [BoxScoreRow],
    lookup: &TeamLookup,
    franchises: &[String],
) -> Result<Vec<&'a BoxScoreRow>, LookupError> {
    if franchises.is_empty() {
        return Ok(rows.iter().collect());
    }

    let mut selected = Vec::new();
    for franchise in franchises {
        let team_id =
            lookup
                .team_id(franchise)
                .ok_or_else(|| LookupError::UnknownFranchise {
                    name: franchise.clone(),
                })?;
        selected.extend(rows.iter().filter(|row| row.team_id == team_id));
    }
    Ok(selected)
}

pub(super) fn build(
    rows: &[&BoxScoreRow],
    stats: [BoxScoreStat; 3],
    team_filtered: bool,
) -> Scatter3dSpec {
    let [x_stat, y_stat, z_stat] = stats;
    let caption = if team_filtered {
        SELECTED_TEAMS_CAPTION
    } else {
        ALL_TEAMS_CAPTION
    };

    Scatter3dSpec {
        axes: [
            x_stat.as_str().to_string(),
            y_stat.as_str().to_string(),
            z_stat.as_str().to_string(),
        ],
        points: rows
            .iter()
            .map(|row| ScatterPoint {
                x: row.stat(x_stat),
                y: row.stat(y_stat),
                z: row.stat(z_stat),
                champion: row.champion,
            })
            .collect(),
        champion_marker: MarkerStyle {
            symbol: CHAMPION_SYMBOL.to_string(),
            color: CHAMPION_COLOR.to_string(),
        },
        regular_marker: MarkerStyle {
            symbol: REGULAR_SYMBOL.to_string(),
            color: REGULAR_COLOR.to_string(),
        },
        caption: caption.to_string(),
    }
}
