use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::modules::models::score::ScoreRecord;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RankingEntry {
    pub runner: String,
    pub total: f64,
}

pub struct RankingHelper {}

impl RankingHelper {
    /// total score per runner, highest first.
    ///
    /// runners with the same total keep the order in which they first appear in `records`.
    pub fn rank_runners(records: &[ScoreRecord]) -> Vec<RankingEntry> {
        let mut ranking: Vec<RankingEntry> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for record in records {
            match positions.get(record.runner.as_str()) {
                Some(&i) => ranking[i].total += record.score,
                None => {
                    positions.insert(&record.runner, ranking.len());
                    ranking.push(RankingEntry {
                        runner: record.runner.clone(),
                        total: record.score,
                    });
                }
            }
        }

        // sort_by is stable, ties stay in first-appearance order
        ranking.sort_by(|a, b| b.total.total_cmp(&a.total));
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_per_runner_and_sorts_descending() {
        let records = vec![
            ScoreRecord::new("A", "X", 5.0),
            ScoreRecord::new("A", "Y", 3.0),
            ScoreRecord::new("B", "Y", 4.0),
            ScoreRecord::new("B", "Z", 1.5),
        ];
        let ranking = RankingHelper::rank_runners(&records);

        let runners: Vec<&str> = ranking.iter().map(|e| e.runner.as_str()).collect();
        assert_eq!(runners, vec!["Y", "X", "Z"]);
        assert_eq!(ranking[0].total, 7.0);

        assert!(ranking.windows(2).all(|w| w[0].total >= w[1].total));

        let ranked_sum: f64 = ranking.iter().map(|e| e.total).sum();
        let input_sum: f64 = records.iter().map(|e| e.score).sum();
        assert_eq!(ranked_sum, input_sum);
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let records = vec![
            ScoreRecord::new("A", "Zoe", 2.0),
            ScoreRecord::new("A", "Anna", 2.0),
            ScoreRecord::new("A", "Mia", 3.0),
        ];
        let runners: Vec<String> = RankingHelper::rank_runners(&records)
            .into_iter()
            .map(|e| e.runner)
            .collect();

        assert_eq!(runners, vec!["Mia", "Zoe", "Anna"]);
    }

    #[test]
    fn empty_input_gives_empty_ranking() {
        assert!(RankingHelper::rank_runners(&[]).is_empty());
    }
}
