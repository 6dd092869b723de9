use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::NewScore;
use crate::modules::models::general::{parse_score, read_csv};

/// the score a runner got in a single race
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ScoreRecord {
    pub race: String,
    pub runner: String,
    pub score: f64,
}

impl ScoreRecord {
    pub fn new(race: &str, runner: &str, score: f64) -> ScoreRecord {
        ScoreRecord {
            race: race.to_string(),
            runner: runner.to_string(),
            score,
        }
    }

    pub fn load(path: &Path) -> Result<Vec<ScoreRecord>> {
        let rows: Vec<NewScore> = read_csv(path)?;

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| -> Result<ScoreRecord> {
                Ok(ScoreRecord {
                    score: parse_score(path, i + 1, &row.score)?,
                    race: row.race,
                    runner: row.runner,
                })
            })
            .collect::<Result<Vec<ScoreRecord>>>()?;

        info!(target: "models/score:load", "loaded {} runner scores", records.len());
        Ok(records)
    }
}

/// restricts the rows shown on the page. `None` matches everything.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Filter {
    pub race: Option<String>,
    pub runner: Option<String>,
}

impl Filter {
    /// build a filter from raw request values, an empty value means "all"
    pub fn new(race: Option<String>, runner: Option<String>) -> Filter {
        Filter {
            race: race.filter(|e| !e.is_empty()),
            runner: runner.filter(|e| !e.is_empty()),
        }
    }

    pub fn matches(&self, record: &ScoreRecord) -> bool {
        let race_ok = self.race.as_ref().map_or(true, |race| *race == record.race);
        let runner_ok = self.runner.as_ref().map_or(true, |runner| *runner == record.runner);

        race_ok && runner_ok
    }

    pub fn apply(&self, records: &[ScoreRecord]) -> Vec<ScoreRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
