pub mod cleaner;
pub mod config;
pub mod fetcher;
pub mod monitor;
pub mod pipeline;
pub mod seen_titles;
pub mod sink;
pub mod sources;
pub mod state;
pub mod traits;
pub mod types;
pub mod worker;

pub use cleaner::{clean_text, word_count};
pub use config::HarvestConfig;
pub use fetcher::RetryingSource;
pub use monitor::run_monitor;
pub use pipeline::run_harvest;
pub use seen_titles::{LoadReport, SeenTitleStore};
pub use sink::CorpusSink;
pub use sources::WikipediaSource;
pub use state::HarvestState;
pub use traits::ArticleSource;
pub use types::*;
pub use worker::run_worker;
