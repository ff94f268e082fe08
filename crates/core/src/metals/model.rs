use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use metalpulse_market_data::Quote;

use crate::series::Dated;

/// Candlestick point: `{x: date, y: [open, high, low, close]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candle {
    pub x: NaiveDate,
    pub y: [Decimal; 4],
}

impl Candle {
    /// `None` when the bar lacks an open or a close.
    ///
    /// A missing high or low is filled from the body of the candle so the
    /// point still renders.
    pub fn from_quote(quote: &Quote) -> Option<Self> {
        let open = quote.open?;
        let close = quote.close;
        let high = quote.high.unwrap_or_else(|| open.max(close));
        let low = quote.low.unwrap_or_else(|| open.min(close));
        Some(Self {
            x: quote.date,
            y: [open, high, low, close],
        })
    }
}

impl Dated for Candle {
    fn date(&self) -> NaiveDate {
        self.x
    }
}
