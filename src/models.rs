use serde::{Deserialize, Serialize};

/// a line of the runner scores csv, exactly as it is stored on disk
#[derive(Serialize, Debug, Clone, Deserialize)]
pub struct NewScore {
    #[serde(rename = "Cursa")]
    pub race: String,
    #[serde(rename = "Corredor")]
    pub runner: String,
    #[serde(rename = "Puntuació")]
    pub score: String,
}

/// a line of the club scores csv, exactly as it is stored on disk
#[derive(Serialize, Debug, Clone, Deserialize)]
pub struct NewClubScore {
    pub club: String,
    #[serde(rename = "cursa")]
    pub race: String,
    #[serde(rename = "puntsTotals")]
    pub points: String,
}
