use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::series::TimeSeries;

/// One date present in both input series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignedPoint {
    pub date: NaiveDate,
    pub a: Decimal,
    pub b: Decimal,
}

/// Inner join of two series on calendar date.
///
/// Both inputs are strictly ascending, so a single merge pass suffices and
/// the output is strictly ascending too. No interpolation or forward fill:
/// a date missing from either side is dropped.
pub fn align(a: &TimeSeries, b: &TimeSeries) -> Vec<AlignedPoint> {
    let (a, b) = (a.observations(), b.observations());
    let mut aligned = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].date.cmp(&b[j].date) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                aligned.push(AlignedPoint {
                    date: a[i].date,
                    a: a[i].price,
                    b: b[j].price,
                });
                i += 1;
                j += 1;
            }
        }
    }

    aligned
}
