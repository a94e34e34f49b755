use std::path::PathBuf;

/// Everything that can abort a fetch run.
///
/// A missing splash image gets its own variant so callers can tell a page
/// whose markup changed apart from a request that failed outright.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no splash image found on {page}")]
    SplashNotFound { page: String },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
