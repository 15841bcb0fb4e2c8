use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArbyError {
    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("Files \"{first}\" and \"{second}\" both map to locale \"{locale}\"")]
    LocaleCollision {
        locale: String,
        first: String,
        second: String,
    },

    #[error("Locale \"{0}\" appears more than once")]
    DuplicateLocale(String),

    #[error("File path \"{0}\" contains no letters to derive a locale from")]
    EmptyLocale(String),

    #[error("Unknown key: \"{0}\"")]
    UnknownKey(String),

    #[error("Unknown locale: \"{0}\"")]
    UnknownLocale(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArbyError>;
