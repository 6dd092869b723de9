use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::config::AppConfig;
use crate::macros::load_error_handler::handle_load_error_http;
use crate::routes::scoreboard::ScoreQuery;
use crate::ScoreboardView;

/// the same data as the page, as json
#[get("/scoreboard?<query..>")]
pub fn get_scoreboard(query: ScoreQuery, config: &State<AppConfig>) -> Result<Json<ScoreboardView>, Status> {
    let view = handle_load_error_http!(
        ScoreboardView::load(config, query.into()),
        "routes/api/scoreboard:get_scoreboard"
    );

    Ok(Json(view))
}
