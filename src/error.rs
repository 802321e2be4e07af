use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("file operation failed: {0}")]
    FileIo(#[from] std::io::Error),

    #[error("could not parse {field} from '{value}': {source}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no level number found in '{0}'")]
    MissingLevel(String),

    #[error("no booster name found on {0}")]
    MissingBoosterName(String),

    #[error("image url '{0}' has no file name")]
    InvalidImageUrl(String),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn network(url: &str, source: reqwest::Error) -> Self {
        ScrapeError::Network {
            url: url.to_string(),
            source,
        }
    }
}
