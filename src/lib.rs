pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HnSearchClient;
pub use app::{gauge::GaugeRenderer, sink::FileGaugeSink};
pub use config::{cli::LocalStorage, Settings};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use crate::core::{controller::AppController, counts::CountsByPage, keywords::KeywordMatcher};
pub use utils::error::{HypeError, Result};
