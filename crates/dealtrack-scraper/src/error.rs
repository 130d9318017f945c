use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("fetch of {url} timed out after {deadline_secs}s")]
    Timeout { url: String, deadline_secs: u64 },

    #[error("fetch worker exited without reporting a result")]
    Worker,
}
