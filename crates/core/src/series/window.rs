//! Trailing window filters over date-ordered data.

use chrono::{Months, NaiveDate};

use super::model::Dated;

/// The tail of `items` dated on or after `cutoff`.
///
/// `items` must be ascending by date.
pub fn trailing_since<T: Dated>(items: &[T], cutoff: NaiveDate) -> &[T] {
    let first = items.partition_point(|item| item.date() < cutoff);
    &items[first..]
}

/// The tail of `items` covering the last `months` calendar months up to `today`.
///
/// Month subtraction clamps to the end of shorter months (Mar 31 minus one
/// month is Feb 28/29).
pub fn trailing_months<T: Dated>(items: &[T], today: NaiveDate, months: u32) -> &[T] {
    match today.checked_sub_months(Months::new(months)) {
        Some(cutoff) => trailing_since(items, cutoff),
        None => items,
    }
}
