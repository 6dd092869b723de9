use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::NewClubScore;
use crate::modules::models::general::{parse_score, read_csv};

/// points a club collected in a race. a club can have more than one entry per race.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ClubScoreRecord {
    pub club: String,
    pub race: String,
    pub points: f64,
}

impl ClubScoreRecord {
    pub fn new(club: &str, race: &str, points: f64) -> ClubScoreRecord {
        ClubScoreRecord {
            club: club.to_string(),
            race: race.to_string(),
            points,
        }
    }

    pub fn load(path: &Path) -> Result<Vec<ClubScoreRecord>> {
        let rows: Vec<NewClubScore> = read_csv(path)?;

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| -> Result<ClubScoreRecord> {
                Ok(ClubScoreRecord {
                    points: parse_score(path, i + 1, &row.points)?,
                    club: row.club,
                    race: row.race,
                })
            })
            .collect::<Result<Vec<ClubScoreRecord>>>()?;

        info!(target: "models/club_score:load", "loaded {} club scores", records.len());
        Ok(records)
    }
}
