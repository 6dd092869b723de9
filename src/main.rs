use log::info;
use rocket::{launch, Build, Rocket};

use ceap_standings::build_rocket;
use ceap_standings::config::AppConfig;
use ceap_standings::modules::helpers::logging::setup_logging;

#[launch]
fn rocket() -> Rocket<Build> {
    setup_logging().expect("Failed to setup logging");

    let config = AppConfig::from_env();
    info!(target: "main", "serving runner scores from {} and club scores from {}",
        config.runner_scores_path.display(), config.club_scores_path.display());

    build_rocket(config)
}
