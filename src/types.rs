/// Outcome of fetching a single title from the content source.
///
/// Redirects, disambiguation pages and missing pages are expected page
/// shapes rather than errors; the worker skips them without retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Plain-text article extract.
    Content(String),
    Redirect,
    Disambiguation,
    NotFound,
}

/// Why a harvest run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    TargetReached,
    NoNewArticles,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::TargetReached => write!(f, "target reached"),
            StopReason::NoNewArticles => write!(f, "no new articles found"),
        }
    }
}

/// Point-in-time view of the shared counters, taken under the state lock.
#[derive(Debug, Clone, Copy)]
pub struct ProgressSnapshot {
    pub total_written: u64,
    pub consecutive_empty_batches: u64,
}

/// Final report produced once every worker and the monitor have joined.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub total_written: u64,
    pub corpus_bytes: u64,
    pub stop_reason: StopReason,
}

#[derive(Debug, thiserror::Error)]
pub enum HarvesterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("source API error [{code}]: {info}")]
    Api { code: String, info: String },

    #[error("batch sampling failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("general error: {0}")]
    General(String),
}

impl HarvesterError {
    /// Whether the batch-sampling retry loop should try again.
    ///
    /// Timeouts, connection failures and 429/5xx responses are worth
    /// retrying; everything else aborts the loop immediately.
    pub fn is_transient(&self) -> bool {
        match self {
            HarvesterError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            HarvesterError::Status { status } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvesterError>;
