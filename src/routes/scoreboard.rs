use log::debug;
use rocket::http::Status;
use rocket::{get, FromForm, State};
use rocket_dyn_templates::Template;

use crate::config::AppConfig;
use crate::macros::load_error_handler::handle_load_error_http;
use crate::modules::models::score::Filter;
use crate::ScoreboardView;

/// the filters of the page, named after the csv columns they filter on
#[derive(FromForm, Debug, Default, Clone)]
pub struct ScoreQuery {
    #[field(name = "Cursa")]
    pub race: Option<String>,
    #[field(name = "Corredor")]
    pub runner: Option<String>,
}

impl From<ScoreQuery> for Filter {
    fn from(query: ScoreQuery) -> Self {
        Filter::new(query.race, query.runner)
    }
}

#[get("/?<query..>")]
pub fn index(query: ScoreQuery, config: &State<AppConfig>) -> Result<Template, Status> {
    debug!(target: "routes/scoreboard:index", "rendering scoreboard for {:?}", query);

    let view = handle_load_error_http!(
        ScoreboardView::load(config, query.into()),
        "routes/scoreboard:index"
    );

    Ok(Template::render("index", &view))
}
