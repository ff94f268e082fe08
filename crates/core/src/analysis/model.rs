//! Analysis request and result models.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use metalpulse_market_data::metal_symbol;

use super::correlation::CorrelationResult;
use crate::constants::{DATE_FORMAT, DEFAULT_ANALYSIS_LOOKBACK_DAYS};
use crate::errors::{Result, ValidationError};

/// Analysis request as it arrives over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequestInput {
    #[serde(default)]
    pub stock_ids: Vec<String>,
    /// Single-stock form used by older clients
    #[serde(default)]
    pub stock_id: Option<String>,
    #[serde(default)]
    pub metal: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Trimmed, non-blank, in caller order; duplicates kept
    pub stock_ids: Vec<String>,
    /// A catalog metal name, or `None` for a stock-only analysis
    pub metal: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisRequest {
    pub fn new(
        stock_ids: Vec<String>,
        metal: Option<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        let stock_ids: Vec<String> = stock_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        if stock_ids.is_empty() {
            return Err(ValidationError::MissingStockIds.into());
        }

        if start > end {
            return Err(ValidationError::InvertedRange { start, end }.into());
        }

        let metal = metal
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if let Some(name) = &metal {
            if metal_symbol(name).is_none() {
                return Err(ValidationError::UnknownMetal(name.clone()).into());
            }
        }

        Ok(Self {
            stock_ids,
            metal,
            start,
            end,
        })
    }

    /// Validate wire input. Missing dates default to the trailing
    /// two years ending `today`.
    pub fn from_input(input: AnalysisRequestInput, today: NaiveDate) -> Result<Self> {
        let mut stock_ids = input.stock_ids;
        if stock_ids.iter().all(|id| id.trim().is_empty()) {
            stock_ids = input.stock_id.into_iter().collect();
        }

        let start_date = input.start_date.filter(|s| !s.trim().is_empty());
        let end_date = input.end_date.filter(|s| !s.trim().is_empty());
        let (start, end) = match (start_date, end_date) {
            (Some(start), Some(end)) => (
                parse_date("start_date", &start)?,
                parse_date("end_date", &end)?,
            ),
            _ => (
                today
                    .checked_sub_days(Days::new(DEFAULT_ANALYSIS_LOOKBACK_DAYS as u64))
                    .unwrap_or(NaiveDate::MIN),
                today,
            ),
        };

        Self::new(stock_ids, input.metal, start, end)
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }
        .into()
    })
}

/// One day of a stock's chart, with the metal's close when aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockPoint {
    pub date: NaiveDate,
    pub stock_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal_price: Option<Decimal>,
}

/// One day of a stock-vs-stock chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairPoint {
    pub date: NaiveDate,
    pub price1: Decimal,
    pub price2: Decimal,
}

/// Per-stock outcome: a chart with its correlation, or an error. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum StockOutcome {
    Ok {
        series: Vec<StockPoint>,
        correlation: Option<CorrelationResult>,
    },
    Err {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockAnalysis {
    /// As the caller spelled it (trimmed)
    pub stock_id: String,
    pub stock_name: String,
    /// Provider symbol, when resolution succeeded
    pub ticker: Option<String>,
    pub outcome: StockOutcome,
}

impl StockAnalysis {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, StockOutcome::Ok { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            StockOutcome::Err { message } => Some(message),
            StockOutcome::Ok { .. } => None,
        }
    }

    pub fn correlation(&self) -> Option<&CorrelationResult> {
        match &self.outcome {
            StockOutcome::Ok { correlation, .. } => correlation.as_ref(),
            StockOutcome::Err { .. } => None,
        }
    }

    pub fn series(&self) -> &[StockPoint] {
        match &self.outcome {
            StockOutcome::Ok { series, .. } => series,
            StockOutcome::Err { .. } => &[],
        }
    }
}

/// Flattens the outcome: `{stock_id, stock_name, ticker?, data, correlation}`
/// or `{stock_id, stock_name, ticker?, error}`.
impl Serialize for StockAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = 2
            + usize::from(self.ticker.is_some())
            + match self.outcome {
                StockOutcome::Ok { .. } => 2,
                StockOutcome::Err { .. } => 1,
            };
        let mut state = serializer.serialize_struct("StockAnalysis", fields)?;
        state.serialize_field("stock_id", &self.stock_id)?;
        state.serialize_field("stock_name", &self.stock_name)?;
        if let Some(ticker) = &self.ticker {
            state.serialize_field("ticker", ticker)?;
        }
        match &self.outcome {
            StockOutcome::Ok {
                series,
                correlation,
            } => {
                state.serialize_field("data", series)?;
                state.serialize_field("correlation", &correlation.map(|c| c.coefficient))?;
            }
            StockOutcome::Err { message } => {
                state.serialize_field("error", message)?;
            }
        }
        state.end()
    }
}

/// Correlation between two successfully fetched stocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairAnalysis {
    pub stock1: String,
    pub stock2: String,
    #[serde(serialize_with = "serialize_coefficient")]
    pub correlation: Option<CorrelationResult>,
    pub data: Vec<PairPoint>,
}

fn serialize_coefficient<S: Serializer>(
    correlation: &Option<CorrelationResult>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    correlation.map(|c| c.coefficient).serialize(serializer)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Provider symbol of the metal, `"None"` without one
    pub metal_ticker: String,
    pub stock_results: Vec<StockAnalysis>,
    /// Empty, never absent, when fewer than two stocks succeeded
    pub stock_vs_stock: Vec<PairAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, d).unwrap()
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_trims_and_keeps_duplicates() {
        let request = AnalysisRequest::new(
            ids(&[" NIKL ", "", "NIKL", "1605.TW"]),
            Some(" Copper ".into()),
            day(1),
            day(10),
        )
        .unwrap();
        assert_eq!(request.stock_ids, ids(&["NIKL", "NIKL", "1605.TW"]));
        assert_eq!(request.metal.as_deref(), Some("Copper"));
    }

    #[test]
    fn test_blank_metal_means_none() {
        let request = AnalysisRequest::new(ids(&["AAA"]), Some("  ".into()), day(1), day(1)).unwrap();
        assert_eq!(request.metal, None);
    }

    #[test]
    fn test_validation_errors() {
        let missing = AnalysisRequest::new(ids(&["  "]), None, day(1), day(2));
        assert!(matches!(
            missing,
            Err(Error::Validation(ValidationError::MissingStockIds))
        ));

        let inverted = AnalysisRequest::new(ids(&["AAA"]), None, day(5), day(2));
        assert!(matches!(
            inverted,
            Err(Error::Validation(ValidationError::InvertedRange { .. }))
        ));

        // Steel indices are dashboard-only
        let steel = AnalysisRequest::new(ids(&["AAA"]), Some("DJUSST".into()), day(1), day(2));
        assert!(matches!(
            steel,
            Err(Error::Validation(ValidationError::UnknownMetal(_)))
        ));
    }

    #[test]
    fn test_from_input_legacy_stock_id_and_default_range() {
        let input = AnalysisRequestInput {
            stock_id: Some("NIKL".into()),
            ..AnalysisRequestInput::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let request = AnalysisRequest::from_input(input, today).unwrap();

        assert_eq!(request.stock_ids, ids(&["NIKL"]));
        assert_eq!(request.end, today);
        assert_eq!((request.end - request.start).num_days(), 730);
    }

    #[test]
    fn test_from_input_rejects_bad_date() {
        let input = AnalysisRequestInput {
            stock_ids: ids(&["AAA"]),
            start_date: Some("2022-13-01".into()),
            end_date: Some("2022-12-31".into()),
            ..AnalysisRequestInput::default()
        };
        let result = AnalysisRequest::from_input(input, day(1));
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidDate { field: "start_date", .. }))
        ));
    }

    #[test]
    fn test_stock_analysis_wire_shape() {
        let ok = StockAnalysis {
            stock_id: "AAA".into(),
            stock_name: "Aaa Corp".into(),
            ticker: Some("AAA".into()),
            outcome: StockOutcome::Ok {
                series: vec![StockPoint {
                    date: day(3),
                    stock_price: dec!(10.5),
                    metal_price: None,
                }],
                correlation: None,
            },
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({
                "stock_id": "AAA",
                "stock_name": "Aaa Corp",
                "ticker": "AAA",
                "data": [{"date": "2022-01-03", "stock_price": 10.5}],
                "correlation": null
            })
        );

        let failed = StockAnalysis {
            stock_id: "ZZZZ".into(),
            stock_name: "ZZZZ".into(),
            ticker: None,
            outcome: StockOutcome::Err {
                message: "No data for date range".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"stock_id": "ZZZZ", "stock_name": "ZZZZ", "error": "No data for date range"})
        );
    }

    #[test]
    fn test_pair_serializes_bare_coefficient() {
        let pair = PairAnalysis {
            stock1: "AAA".into(),
            stock2: "BBB".into(),
            correlation: Some(CorrelationResult {
                coefficient: 0.5,
                sample_size: 4,
            }),
            data: vec![],
        };
        let value = serde_json::to_value(&pair).unwrap();
        assert_eq!(value["correlation"], json!(0.5));
        assert_eq!(value["data"], json!([]));
    }
}
