//! Daily price series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use metalpulse_market_data::Quote;

/// Anything positioned on a calendar day.
///
/// Implemented by every element kept in date order, so the trailing window
/// filter works on observations and candles alike.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// One closing price on one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub price: Decimal,
}

impl Observation {
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}

impl Dated for Observation {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Date-ordered daily prices for one symbol.
///
/// Invariants: strictly ascending dates, so no date appears twice. The
/// series cannot be mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    observations: Vec<Observation>,
}

impl TimeSeries {
    /// Build a series from rows in any order.
    ///
    /// Rows are sorted by date; when a date repeats, the row that came last
    /// in the input wins.
    pub fn new(mut observations: Vec<Observation>) -> Self {
        // Stable sort keeps input order among equal dates
        observations.sort_by_key(|o| o.date);

        let mut deduped: Vec<Observation> = Vec::with_capacity(observations.len());
        for observation in observations {
            match deduped.last_mut() {
                Some(last) if last.date == observation.date => *last = observation,
                _ => deduped.push(observation),
            }
        }

        Self {
            observations: deduped,
        }
    }

    /// Closing prices of `quotes` that fall within `[start, end]`.
    pub fn from_quotes(quotes: &[Quote], start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            quotes
                .iter()
                .filter(|q| q.date >= start && q.date <= end)
                .map(|q| Observation::new(q.date, q.close))
                .collect(),
        )
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
