use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

pub const DEFAULT_RUNNER_SCORES_CSV: &str = "corredors_ceap.csv";
pub const DEFAULT_CLUB_SCORES_CSV: &str = "puntuacio_clubs.csv";

/// where the score files live. built once at startup and handed to every request.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub runner_scores_path: PathBuf,
    pub club_scores_path: PathBuf,
}

impl AppConfig {
    pub fn new(runner_scores_path: impl Into<PathBuf>, club_scores_path: impl Into<PathBuf>) -> AppConfig {
        AppConfig {
            runner_scores_path: runner_scores_path.into(),
            club_scores_path: club_scores_path.into(),
        }
    }

    /// read `RUNNER_SCORES_CSV` and `CLUB_SCORES_CSV`, falling back to the default file names
    pub fn from_env() -> AppConfig {
        dotenv().ok();

        AppConfig::new(
            env::var("RUNNER_SCORES_CSV").unwrap_or_else(|_| DEFAULT_RUNNER_SCORES_CSV.to_string()),
            env::var("CLUB_SCORES_CSV").unwrap_or_else(|_| DEFAULT_CLUB_SCORES_CSV.to_string()),
        )
    }
}
