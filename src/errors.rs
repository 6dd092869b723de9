use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not open {}: {}", path.display(), source))]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Malformed csv in {}: {}", path.display(), source))]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    #[snafu(display("Invalid score `{}` in {} (row {})", value, path.display(), row))]
    ParseScore {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
