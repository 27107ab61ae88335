//! Parallel-coordinates view over the filtered advanced-stats rows.

use courtside_types::{AdvancedDim, ColorScale, DimensionTrack, ParallelCoordsSpec};

use crate::datasets::AdvancedRow;

const TITLE: &str = "Key Stats for NBA Team by Playoff Performance";

/// Diverging palette centered between tiers 3 and 4, so missed-playoffs
/// seasons shade red and deep runs shade green.
const COLOR_PALETTE: &str = "RdYlGn";
const TIER_MIDPOINT: f64 = 3.5;

pub(super) fn build(rows: &[&AdvancedRow]) -> ParallelCoordsSpec {
    let dimensions = AdvancedDim::ALL
        .iter()
        .map(|dim| DimensionTrack {
            column: dim.column().to_string(),
            values: rows.iter().map(|row| row.dim(*dim)).collect(),
        })
        .collect();

    ParallelCoordsSpec {
        title: TITLE.to_string(),
        dimensions,
        color_values: rows.iter().map(|row| row.tier.value() as f64).collect(),
        color_scale: ColorScale {
            palette: COLOR_PALETTE.to_string(),
            midpoint: TIER_MIDPOINT,
        },
    }
}
