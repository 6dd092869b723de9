use dotenvy::dotenv;
use log::error;

use ceap_standings::config::AppConfig;
use ceap_standings::modules::helpers::logging::setup_logging;
use ceap_standings::modules::helpers::math::Math;
use ceap_standings::modules::models::score::Filter;
use ceap_standings::ScoreboardView;

fn main() {
    dotenv().ok();
    setup_logging().expect("failed to setup logging");

    let config = AppConfig::from_env();
    let view = match ScoreboardView::load(&config, Filter::default()) {
        Ok(view) => view,
        Err(error) => {
            error!(target: "print_standings", "failed loading scores: {}", error);
            std::process::exit(1);
        }
    };

    println!("Runners");
    for (i, entry) in view.ranking.iter().enumerate() {
        println!("{:>4}. {:<40} {:>8}", i + 1, entry.runner, Math::format_score(entry.total));
    }

    println!();
    println!("Clubs");
    println!("{:<30} {}", "", view.club_table.races.join("\t"));
    for row in &view.club_rows {
        let cells: Vec<String> = row.scores.iter().map(|e| Math::format_score(*e)).collect();
        println!("{:<30} {}\t{}", row.club, cells.join("\t"), Math::format_score(row.total));
    }

    let race_totals: Vec<String> = view
        .club_table
        .races
        .iter()
        .map(|race| Math::format_score(view.club_table.race_total(race)))
        .collect();
    println!("{:<30} {}\t{}", "Total", race_totals.join("\t"), Math::format_score(view.grand_total));
}
