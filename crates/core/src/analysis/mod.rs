//! Correlation analysis between stocks and a metal.
//!
//! ```text
//! AnalysisRequest ─▶ AnalysisService ─▶ SeriesStore (metal + stocks, concurrent)
//!                          │
//!                          ├─▶ align + correlate (stock vs metal)
//!                          ├─▶ align + correlate (stock vs stock)
//!                          ▼
//!                    AnalysisResult
//! ```

mod align;
mod correlation;
mod model;
mod service;


pub use align::{align, AlignedPoint};
pub use correlation::{correlate, CorrelationResult};
pub use model::{
    AnalysisRequest, AnalysisRequestInput, AnalysisResult, PairAnalysis, PairPoint,
    StockAnalysis, StockOutcome, StockPoint,
};
pub use service::{assemble, AnalysisService, AnalysisServiceTrait};
