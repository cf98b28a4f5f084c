pub mod color;
pub mod controller;
pub mod counts;
pub mod fetcher;
pub mod hype;
pub mod keywords;

pub use crate::domain::model::{DerivedMetrics, PageOutcome, PageResult};
pub use crate::domain::ports::{ConfigProvider, GaugeObserver, PostSource, Storage};
pub use crate::utils::error::Result;
