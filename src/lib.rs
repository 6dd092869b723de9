use std::collections::BTreeMap;

use rocket::fs::{relative, FileServer};
use rocket::{routes, Build, Rocket};
use rocket_dyn_templates::Template;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::modules::helpers::club::{ClubMatrix, ClubRow};
use crate::modules::helpers::handelbars::format_score::FormatScore;
use crate::modules::helpers::handelbars::position::Position;
use crate::modules::helpers::ranking::RankingEntry;
use crate::modules::models::score::{Filter, ScoreRecord};

pub mod config;
pub mod errors;
pub mod models;
pub mod modules;
pub mod macros {
    pub mod load_error_handler;
}
pub mod routes {
    pub mod scoreboard;
    pub mod api {
        pub mod scoreboard;
    }
}


/// everything the scoreboard page shows
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ScoreboardView {
    /// runner scores matching the filter
    pub rows: Vec<ScoreRecord>,
    pub races: Vec<String>,
    pub runners: Vec<String>,
    pub filter: Filter,
    /// total of the filtered rows per race
    pub totals_by_race: BTreeMap<String, f64>,
    pub ranking: Vec<RankingEntry>,
    pub club_table: ClubMatrix,
    pub club_rows: Vec<ClubRow>,
    pub grand_total: f64,
}

/// build the web server. the config is the only state shared between requests.
pub fn build_rocket(config: AppConfig) -> Rocket<Build> {
    rocket::build()
        .manage(config)
        .attach(Template::custom(|engines| {
            engines.handlebars.register_helper("formatScore", Box::new(FormatScore));
            engines.handlebars.register_helper("position", Box::new(Position));
            engines.handlebars.set_strict_mode(true);
        }))
        .mount("/", routes![routes::scoreboard::index])
        .mount("/api", routes![routes::api::scoreboard::get_scoreboard])
        .mount("/static", FileServer::from(relative!("static")))
}
