//! Metals dashboard: daily candles for every catalog metal and steel index.

mod model;
mod service;

pub use model::Candle;
pub use service::{MetalsOverview, MetalsService, MetalsServiceTrait};
