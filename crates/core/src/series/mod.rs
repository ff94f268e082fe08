//! Daily price series and where they come from.
//!
//! - **Model** (`model.rs`) - `TimeSeries` and `Observation`
//! - **Store** (`store.rs`) - provider facade with timeout and cache
//! - **Cache** (`cache.rs`) - TTL cache of provider history
//! - **Window** (`window.rs`) - trailing date filters

mod cache;
mod model;
mod store;
mod window;

pub use cache::SeriesCache;
pub use model::{Dated, Observation, TimeSeries};
pub use store::{SeriesStore, SeriesStoreTrait};
pub use window::{trailing_months, trailing_since};
