use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::modules::helpers::general::Helpers;
use crate::modules::models::club_score::ClubScoreRecord;

/// points per club per race, with the totals of every row and column.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct ClubMatrix {
    pub clubs: Vec<String>,
    pub races: Vec<String>,
    /// club -> race -> points. pairs without entries are absent, read them with [`ClubMatrix::score`]
    pub scores: BTreeMap<String, BTreeMap<String, f64>>,
    pub club_totals: BTreeMap<String, f64>,
    pub race_totals: BTreeMap<String, f64>,
    /// clubs ordered by total, highest first. equal totals stay alphabetical.
    pub clubs_sorted: Vec<String>,
}

/// a line of the club table as it is shown on the page
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ClubRow {
    pub club: String,
    /// one cell per race, in the order of [`ClubMatrix::races`]
    pub scores: Vec<f64>,
    pub total: f64,
}

impl ClubMatrix {
    pub fn build(records: &[ClubScoreRecord]) -> ClubMatrix {
        let clubs = Helpers::distinct_sorted(records, |e| e.club.as_str());
        let races = Helpers::distinct_sorted(records, |e| e.race.as_str());

        let mut scores: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for record in records {
            *scores
                .entry(record.club.clone())
                .or_default()
                .entry(record.race.clone())
                .or_insert(0.0) += record.points;
        }

        let mut matrix = ClubMatrix {
            clubs,
            races,
            scores,
            ..Default::default()
        };

        matrix.club_totals = matrix
            .clubs
            .iter()
            .map(|club| {
                let total: f64 = matrix.races.iter().map(|race| matrix.score(club, race)).sum();
                (club.clone(), total)
            })
            .collect();

        matrix.race_totals = matrix
            .races
            .iter()
            .map(|race| {
                let total: f64 = matrix.clubs.iter().map(|club| matrix.score(club, race)).sum();
                (race.clone(), total)
            })
            .collect();

        let mut clubs_sorted = matrix.clubs.clone();
        clubs_sorted.sort_by(|a, b| matrix.club_total(b).total_cmp(&matrix.club_total(a)));
        matrix.clubs_sorted = clubs_sorted;

        matrix
    }

    /// points of `club` in `race`, 0 when the club has no entry for that race
    pub fn score(&self, club: &str, race: &str) -> f64 {
        self.scores
            .get(club)
            .and_then(|races| races.get(race))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn club_total(&self, club: &str) -> f64 {
        self.club_totals.get(club).copied().unwrap_or(0.0)
    }

    pub fn race_total(&self, race: &str) -> f64 {
        self.race_totals.get(race).copied().unwrap_or(0.0)
    }

    pub fn grand_total(&self) -> f64 {
        self.club_totals.values().sum()
    }

    /// the table rows, in the order of [`ClubMatrix::clubs_sorted`]
    pub fn rows(&self) -> Vec<ClubRow> {
        self.clubs_sorted
            .iter()
            .map(|club| ClubRow {
                club: club.clone(),
                scores: self.races.iter().map(|race| self.score(club, race)).collect(),
                total: self.club_total(club),
            })
            .collect()
    }
}
