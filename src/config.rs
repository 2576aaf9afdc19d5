use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str =
    "MarathiCorpusBot/1.0 (https://example.com; contact@example.com)";

/// Run-time configuration for one harvest session.
///
/// Every value is static for the lifetime of a run; defaults are tuned for
/// the Marathi Wikipedia.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "corpus-harvester",
    about = "Collects a deduplicated plain-text article corpus from randomly sampled wiki pages"
)]
pub struct HarvestConfig {
    /// Stop once this many articles have been written (counting previously
    /// collected valid articles). Omit to run until the empty-batch
    /// threshold fires.
    #[arg(long)]
    pub target_articles: Option<u64>,

    /// Number of concurrent harvest workers.
    #[arg(long, default_value_t = 8)]
    pub workers: usize,

    /// Titles requested per random-sample call.
    #[arg(long, default_value_t = 20)]
    pub batch_size: usize,

    /// Maximum attempts for one batch-sampling call.
    #[arg(long, default_value_t = 4)]
    pub max_retries: u32,

    /// Base delay between sampling retries; attempt k waits k times this.
    #[arg(long, default_value_t = 10)]
    pub retry_delay_seconds: u64,

    /// Pause after a sampling call has exhausted its retries.
    #[arg(long, default_value_t = 30)]
    pub cooldown_seconds: u64,

    /// Interval between progress reports.
    #[arg(long, default_value_t = 60)]
    pub monitor_interval_seconds: u64,

    /// Stop after this many consecutive batches yield no new articles.
    #[arg(long, default_value_t = 100)]
    pub empty_batch_threshold: u64,

    /// Reject articles whose cleaned text has this many words or fewer.
    #[arg(long, default_value_t = 50)]
    pub min_word_count: usize,

    /// Wikipedia language subdomain to harvest.
    #[arg(long, default_value = "mr")]
    pub language: String,

    /// User agent sent with every API request.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub request_timeout_seconds: u64,

    /// Corpus output file (one cleaned article per line).
    #[arg(long, default_value = "marathi_clean_corpus.txt")]
    pub corpus_path: PathBuf,

    /// Seen-titles registry file (one title per line).
    #[arg(long, default_value = "marathi_seen_titles.txt")]
    pub seen_titles_path: PathBuf,
}

impl HarvestConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_seconds)
    }

    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor_interval_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            target_articles: None,
            workers: 8,
            batch_size: 20,
            max_retries: 4,
            retry_delay_seconds: 10,
            cooldown_seconds: 30,
            monitor_interval_seconds: 60,
            empty_batch_threshold: 100,
            min_word_count: 50,
            language: "mr".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_seconds: 30,
            corpus_path: PathBuf::from("marathi_clean_corpus.txt"),
            seen_titles_path: PathBuf::from("marathi_seen_titles.txt"),
        }
    }
}
