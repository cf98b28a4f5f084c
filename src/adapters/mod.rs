// Adapters layer: concrete implementations for external systems.

pub mod hn_search;

pub use hn_search::HnSearchClient;
