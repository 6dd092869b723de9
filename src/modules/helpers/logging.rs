use std::env;

use dotenvy::dotenv;
use fern::Dispatch;
use log::LevelFilter;

/// `LOGGING_LEVEL` names, unknown or missing values log at info
pub fn level_from_name(name: Option<&str>) -> LevelFilter {
    match name.map(|e| e.trim().to_uppercase()).as_deref() {
        Some("OFF") => LevelFilter::Off,
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// log to stdout and to `LOG_FILE` (program.log when unset)
pub fn setup_logging() -> Result<(), fern::InitError> {
    dotenv().ok();

    let level = level_from_name(env::var("LOGGING_LEVEL").ok().as_deref());
    let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "program.log".to_string());

    Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file)?)
        .apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_level_names_in_any_case() {
        assert_eq!(level_from_name(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_name(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(level_from_name(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(level_from_name(None), LevelFilter::Info);
        assert_eq!(level_from_name(Some("loud")), LevelFilter::Info);
    }
}
