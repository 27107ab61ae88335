//! League-average line chart, one colored series per season result.

use courtside_types::{LineChartSpec, LinePoint, LineSeries, LineStat, SeasonResult};

use crate::datasets::LineSeriesRow;

pub(super) fn build(rows: &[LineSeriesRow], stat: LineStat) -> LineChartSpec {
    let series = SeasonResult::ALL
        .iter()
        .map(|result| LineSeries {
            result: *result,
            color: result.color().to_string(),
            points: rows
                .iter()
                .filter(|row| row.result == *result)
                .map(|row| LinePoint {
                    year: row.year,
                    value: row.stat(stat),
                })
                .collect(),
        })
        .collect();

    LineChartSpec {
        title: format!("{} since 2010", stat.display_name()),
        stat,
        y_domain: stat.axis_range(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i64, off_rtg: f64, def_rtg: f64, result: SeasonResult) -> LineSeriesRow {
        LineSeriesRow {
            year,
            win_pct: 0.5,
            ppg: 100.0,
            apg: 24.0,
            rpg: 44.0,
            off_rtg,
            def_rtg,
            efg_pct: 0.5,
            opp_efg_pct: 0.5,
            net_rtg: off_rtg - def_rtg,
            result,
        }
    }

    #[test]
    fn splits_rows_into_result_series() {
        let rows = vec![
            row(2016, 110.0, 105.0, SeasonResult::MadePlayoffs),
            row(2016, 102.0, 108.0, SeasonResult::MissedPlayoffs),
            row(2017, 111.0, 104.0, SeasonResult::MadePlayoffs),
        ];
        let spec = build(&rows, LineStat::NetRtg);

        assert_eq!(spec.series.len(), 2);
        let made = &spec.series[0];
        assert_eq!(made.result, SeasonResult::MadePlayoffs);
        assert_eq!(made.color, "green");
        assert_eq!(
            made.points,
            vec![
                LinePoint {
                    year: 2016,
                    value: 5.0
                },
                LinePoint {
                    year: 2017,
                    value: 7.0
                }
            ]
        );
        assert_eq!(spec.series[1].points.len(), 1);
    }

    #[test]
    fn y_domain_is_pinned_per_statistic() {
        let rows = vec![row(2016, 110.0, 105.0, SeasonResult::MadePlayoffs)];
        let spec = build(&rows, LineStat::Ppg);
        assert_eq!(spec.y_domain.min, 90.0);
        assert_eq!(spec.y_domain.max, 120.0);
        assert_eq!(spec.title, "Points/gm since 2010");
    }
}
