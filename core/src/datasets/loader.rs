//! CSV/JSON ingestion through DataFusion.
//!
//! Each table is registered against a short-lived SessionContext, read
//! back with an explicit projection, and extracted into typed rows with
//! the column helpers. Any missing file or malformed column aborts the
//! load with an error naming the resource.

use std::path::Path;

use datafusion::arrow::record_batch::RecordBatch;
use datafusion::prelude::{CsvReadOptions, SessionContext};
use tracing::info;

use courtside_types::{AdvancedDim, BoxScoreStat, PlayoffTier, SeasonResult};

use super::column_helpers::{col_f64, col_i64, col_strings};
use super::error::DatasetError;
use super::{AdvancedRow, BoxScoreRow, LineSeriesRow, Tables, TeamLookup};
use crate::context::AppConfig;

const ADVANCED_TABLE: &str = "advanced";
const LINE_TABLE: &str = "line_series";
const BOX_TABLE: &str = "box_scores";

/// Load all four startup datasets from the configured data directory.
pub async fn load_tables(config: &AppConfig) -> Result<Tables, DatasetError> {
    let ctx = SessionContext::new();

    let advanced = load_advanced(&ctx, &config.advanced_path()).await?;
    let line_series = load_line_series(&ctx, &config.line_series_path()).await?;
    let box_scores = load_box_scores(&ctx, &config.box_score_path()).await?;
    let team_lookup = load_team_lookup(&config.team_lookup_path())?;

    info!(
        advanced = advanced.len(),
        line_series = line_series.len(),
        box_scores = box_scores.len(),
        franchises = team_lookup.len(),
        "datasets loaded"
    );

    Ok(Tables {
        advanced,
        line_series,
        box_scores,
        team_lookup,
    })
}

async fn register_csv(
    ctx: &SessionContext,
    table: &str,
    path: &Path,
) -> Result<(), DatasetError> {
    // Probe the file up front so a missing dataset reports as such
    // instead of as an opaque planner error.
    std::fs::metadata(path).map_err(|source| DatasetError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    ctx.register_csv(table, path.to_string_lossy().as_ref(), CsvReadOptions::new())
        .await
        .map_err(|source| DatasetError::Register {
            path: path.to_path_buf(),
            source,
        })
}

async fn collect(
    ctx: &SessionContext,
    table: &'static str,
    sql: &str,
) -> Result<Vec<RecordBatch>, DatasetError> {
    let df = ctx
        .sql(sql)
        .await
        .map_err(|source| DatasetError::Query { table, source })?;
    df.collect()
        .await
        .map_err(|source| DatasetError::Query { table, source })
}

fn column_err(table: &'static str) -> impl Fn(String) -> DatasetError {
    move |message| DatasetError::Column { table, message }
}

async fn load_advanced(
    ctx: &SessionContext,
    path: &Path,
) -> Result<Vec<AdvancedRow>, DatasetError> {
    register_csv(ctx, ADVANCED_TABLE, path).await?;

    let dim_list = AdvancedDim::ALL
        .iter()
        .map(|d| format!("\"{}\"", d.column()))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("SELECT \"Full Team\", \"Playoffs\", {dim_list} FROM {ADVANCED_TABLE}");
    let batches = collect(ctx, ADVANCED_TABLE, &sql).await?;

    let mut rows = Vec::new();
    for batch in &batches {
        let labels = col_strings(batch, 0).map_err(column_err(ADVANCED_TABLE))?;
        let tiers = col_i64(batch, 1).map_err(column_err(ADVANCED_TABLE))?;
        let mut dim_columns = Vec::with_capacity(AdvancedDim::COUNT);
        for i in 0..AdvancedDim::COUNT {
            dim_columns.push(col_f64(batch, 2 + i).map_err(column_err(ADVANCED_TABLE))?);
        }

        for row in 0..batch.num_rows() {
            let tier = PlayoffTier::from_value(tiers[row]).ok_or(DatasetError::InvalidTier {
                table: ADVANCED_TABLE,
                value: tiers[row],
            })?;
            let mut dims = [0.0; AdvancedDim::COUNT];
            for (i, column) in dim_columns.iter().enumerate() {
                dims[i] = column[row];
            }
            rows.push(AdvancedRow::new(labels[row].clone(), tier, dims));
        }
    }
    Ok(rows)
}

async fn load_line_series(
    ctx: &SessionContext,
    path: &Path,
) -> Result<Vec<LineSeriesRow>, DatasetError> {
    register_csv(ctx, LINE_TABLE, path).await?;

    let sql = format!(
        "SELECT \"Year\", \"Win%\", \"PPG\", \"APG\", \"RPG\", \"oRTG\", \"dRTG\", \
         \"eFGPerc\", \"OeFGPerc\", \"Result\" FROM {LINE_TABLE}"
    );
    let batches = collect(ctx, LINE_TABLE, &sql).await?;

    let mut rows = Vec::new();
    for batch in &batches {
        let years = col_i64(batch, 0).map_err(column_err(LINE_TABLE))?;
        let win_pct = col_f64(batch, 1).map_err(column_err(LINE_TABLE))?;
        let ppg = col_f64(batch, 2).map_err(column_err(LINE_TABLE))?;
        let apg = col_f64(batch, 3).map_err(column_err(LINE_TABLE))?;
        let rpg = col_f64(batch, 4).map_err(column_err(LINE_TABLE))?;
        let off_rtg = col_f64(batch, 5).map_err(column_err(LINE_TABLE))?;
        let def_rtg = col_f64(batch, 6).map_err(column_err(LINE_TABLE))?;
        let efg_pct = col_f64(batch, 7).map_err(column_err(LINE_TABLE))?;
        let opp_efg_pct = col_f64(batch, 8).map_err(column_err(LINE_TABLE))?;
        let results = col_strings(batch, 9).map_err(column_err(LINE_TABLE))?;

        for row in 0..batch.num_rows() {
            let result = SeasonResult::from_label(&results[row]).ok_or_else(|| {
                DatasetError::InvalidResult {
                    value: results[row].clone(),
                }
            })?;
            rows.push(LineSeriesRow {
                year: years[row],
                win_pct: win_pct[row],
                ppg: ppg[row],
                apg: apg[row],
                rpg: rpg[row],
                off_rtg: off_rtg[row],
                def_rtg: def_rtg[row],
                efg_pct: efg_pct[row],
                opp_efg_pct: opp_efg_pct[row],
                net_rtg: off_rtg[row] - def_rtg[row],
                result,
            });
        }
    }
    Ok(rows)
}

async fn load_box_scores(
    ctx: &SessionContext,
    path: &Path,
) -> Result<Vec<BoxScoreRow>, DatasetError> {
    register_csv(ctx, BOX_TABLE, path).await?;

    let stat_list = BoxScoreStat::ALL
        .iter()
        .map(|s| format!("\"{}\"", s.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("SELECT \"TEAM_ID\", \"CHAMP\", {stat_list} FROM {BOX_TABLE}");
    let batches = collect(ctx, BOX_TABLE, &sql).await?;

    let mut rows = Vec::new();
    for batch in &batches {
        let team_ids = col_i64(batch, 0).map_err(column_err(BOX_TABLE))?;
        let champ_flags = col_i64(batch, 1).map_err(column_err(BOX_TABLE))?;
        let mut stat_columns = Vec::with_capacity(BoxScoreStat::COUNT);
        for i in 0..BoxScoreStat::COUNT {
            stat_columns.push(col_f64(batch, 2 + i).map_err(column_err(BOX_TABLE))?);
        }

        for row in 0..batch.num_rows() {
            let mut stats = [0.0; BoxScoreStat::COUNT];
            for (i, column) in stat_columns.iter().enumerate() {
                stats[i] = column[row];
            }
            rows.push(BoxScoreRow::new(
                team_ids[row],
                champ_flags[row] != 0,
                stats,
            ));
        }
    }
    Ok(rows)
}

fn load_team_lookup(path: &Path) -> Result<TeamLookup, DatasetError> {
    let bytes = std::fs::read(path).map_err(|source| DatasetError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DatasetError::ParseLookup {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DatasetFiles;
    use courtside_types::{BOUNDS_LABEL, LineStat};

    fn write_fixtures(dir: &Path) {
        let advanced = "\
Full Team,Playoffs,o_eFG%,DRtg,W%,NRtg,ORtg,eFG%,TS%
Bounds,1,0.4,95.0,0.1,-15.0,95.0,0.4,0.45
Bounds,6,0.62,125.0,0.95,15.0,125.0,0.62,0.68
2016 Cleveland Cavaliers*,6,0.5,107.3,0.695,3.4,110.9,0.525,0.568
2016 Golden State Warriors*,5,0.48,103.8,0.89,10.8,114.5,0.563,0.593
2014 Charlotte Bobcats*,2,0.49,101.2,0.524,-0.1,101.1,0.48,0.52
";
        std::fs::write(dir.join("advanced.csv"), advanced).unwrap();

        let line = "\
Year,Win%,PPG,APG,RPG,oRTG,dRTG,eFGPerc,OeFGPerc,Result
2016,0.695,104.3,22.7,42.1,110.0,105.0,0.52,0.49,Made Playoffs
2016,0.35,98.2,20.9,43.0,102.0,108.0,0.47,0.51,Missed Playoffs
";
        std::fs::write(dir.join("line_graph_data.csv"), line).unwrap();

        let header = BoxScoreStat::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let stats_a = (0..BoxScoreStat::COUNT)
            .map(|i| format!("{}.5", i))
            .collect::<Vec<_>>()
            .join(",");
        let stats_b = (0..BoxScoreStat::COUNT)
            .map(|i| format!("{}.0", i + 1))
            .collect::<Vec<_>>()
            .join(",");
        let box_scores = format!(
            "TEAM_ID,CHAMP,{header}\n1610612739,1,{stats_a}\n1610612744,0,{stats_b}\n"
        );
        std::fs::write(dir.join("all_nba.csv"), box_scores).unwrap();

        let lookup = r#"{"Cleveland Cavaliers": 1610612739, "Golden State Warriors": 1610612744}"#;
        std::fs::write(dir.join("teamlookup.json"), lookup).unwrap();
    }

    fn config_for(dir: &Path) -> AppConfig {
        AppConfig {
            data_directory: dir.to_string_lossy().into_owned(),
            datasets: DatasetFiles::default(),
        }
    }

    #[tokio::test]
    async fn loads_all_tables_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let tables = load_tables(&config_for(dir.path())).await.unwrap();

        assert_eq!(tables.advanced.len(), 5);
        assert_eq!(tables.line_series.len(), 2);
        assert_eq!(tables.box_scores.len(), 2);
        assert_eq!(tables.team_lookup.len(), 2);

        let cavs = &tables.advanced[2];
        assert_eq!(cavs.label, "2016 Cleveland Cavaliers*");
        assert_eq!(cavs.tier, PlayoffTier::WonFinals);
        assert_eq!(cavs.dim(AdvancedDim::OffRating), 110.9);

        assert_eq!(
            tables.label_inventory().first().map(String::as_str),
            Some(BOUNDS_LABEL)
        );
    }

    #[tokio::test]
    async fn derives_net_rating_per_row() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let tables = load_tables(&config_for(dir.path())).await.unwrap();
        let made = &tables.line_series[0];
        assert_eq!(made.result, SeasonResult::MadePlayoffs);
        assert_eq!(made.stat(LineStat::NetRtg), 5.0);
        assert_eq!(tables.line_series[1].stat(LineStat::NetRtg), -6.0);
    }

    #[tokio::test]
    async fn box_score_columns_land_in_stat_order() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let tables = load_tables(&config_for(dir.path())).await.unwrap();
        let champs = &tables.box_scores[0];
        assert!(champs.champion);
        assert_eq!(champs.team_id, 1610612739);
        assert_eq!(champs.stat(BoxScoreStat::Min), 0.5);
        assert_eq!(
            champs.stat(BoxScoreStat::PlusMinus),
            (BoxScoreStat::COUNT - 1) as f64 + 0.5
        );
        assert!(!tables.box_scores[1].champion);
    }

    #[tokio::test]
    async fn missing_dataset_is_fatal_and_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        // No fixture files written.
        let err = load_tables(&config_for(dir.path())).await.unwrap_err();
        match err {
            DatasetError::Missing { path, .. } => {
                assert!(path.ends_with("advanced.csv"));
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }
}
