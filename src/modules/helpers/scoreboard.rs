use std::collections::BTreeMap;

use log::debug;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::modules::helpers::club::ClubMatrix;
use crate::modules::helpers::general::Helpers;
use crate::modules::helpers::ranking::RankingHelper;
use crate::modules::models::club_score::ClubScoreRecord;
use crate::modules::models::score::{Filter, ScoreRecord};
use crate::ScoreboardView;

impl ScoreboardView {
    /// read both csv files and aggregate them. nothing is cached, every call reads the files again.
    pub fn load(config: &AppConfig, filter: Filter) -> Result<ScoreboardView> {
        let scores = ScoreRecord::load(&config.runner_scores_path)?;
        let club_scores = ClubScoreRecord::load(&config.club_scores_path)?;

        Ok(ScoreboardView::build(&scores, &club_scores, filter))
    }

    /// only `rows` and `totals_by_race` respect the filter,
    /// the dropdowns, ranking and club table always use every record.
    pub fn build(scores: &[ScoreRecord], club_scores: &[ClubScoreRecord], filter: Filter) -> ScoreboardView {
        let rows = filter.apply(scores);
        debug!(target: "helpers/scoreboard:build", "{} of {} rows match {:?}", rows.len(), scores.len(), filter);

        let totals_by_race: BTreeMap<String, f64> =
            Helpers::sum_by_key(&rows, |e| e.race.clone(), |e| e.score)
                .into_iter()
                .collect();

        let club_table = ClubMatrix::build(club_scores);

        ScoreboardView {
            races: Helpers::distinct_sorted(scores, |e| e.race.as_str()),
            runners: Helpers::distinct_sorted(scores, |e| e.runner.as_str()),
            ranking: RankingHelper::rank_runners(scores),
            club_rows: club_table.rows(),
            grand_total: club_table.grand_total(),
            rows,
            filter,
            totals_by_race,
            club_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> Vec<ScoreRecord> {
        vec![
            ScoreRecord::new("A", "X", 5.0),
            ScoreRecord::new("A", "Y", 3.0),
            ScoreRecord::new("B", "Y", 4.0),
        ]
    }

    fn club_scores() -> Vec<ClubScoreRecord> {
        vec![
            ClubScoreRecord::new("C1", "R1", 10.0),
            ClubScoreRecord::new("C1", "R2", 5.0),
            ClubScoreRecord::new("C2", "R1", 20.0),
        ]
    }

    #[test]
    fn race_filter_keeps_both_rows_and_totals_them() {
        let scores = vec![ScoreRecord::new("A", "X", 5.0), ScoreRecord::new("A", "Y", 3.0)];
        let view = ScoreboardView::build(&scores, &[], Filter::new(Some("A".into()), None));

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.totals_by_race["A"], 8.0);
    }

    #[test]
    fn filter_only_touches_rows_and_race_totals() {
        let view = ScoreboardView::build(&scores(), &club_scores(), Filter::new(None, Some("X".into())));

        assert_eq!(view.rows, vec![ScoreRecord::new("A", "X", 5.0)]);
        assert_eq!(view.totals_by_race.len(), 1);
        assert_eq!(view.totals_by_race["A"], 5.0);

        // unfiltered
        assert_eq!(view.races, vec!["A", "B"]);
        assert_eq!(view.runners, vec!["X", "Y"]);
        assert_eq!(view.ranking[0].runner, "Y");
        assert_eq!(view.ranking[0].total, 7.0);
        assert_eq!(view.club_table.clubs_sorted, vec!["C2", "C1"]);
    }

    #[test]
    fn echoes_the_active_filter() {
        let view = ScoreboardView::build(&scores(), &[], Filter::new(Some("B".into()), Some(String::new())));

        assert_eq!(view.filter.race.as_deref(), Some("B"));
        assert_eq!(view.filter.runner, None);
    }

    #[test]
    fn empty_inputs_give_an_empty_view() {
        let view = ScoreboardView::build(&[], &[], Filter::default());

        assert!(view.rows.is_empty());
        assert!(view.races.is_empty());
        assert!(view.runners.is_empty());
        assert!(view.totals_by_race.is_empty());
        assert!(view.ranking.is_empty());
        assert!(view.club_rows.is_empty());
        assert_eq!(view.club_table, ClubMatrix::default());
        assert_eq!(view.grand_total, 0.0);
    }
}
