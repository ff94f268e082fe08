//! Yahoo Finance API response models.
//!
//! These models are used for parsing the quoteSummary API responses, which
//! carry the display names the chart endpoint does not.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    /// `null` for unknown symbols
    #[serde(default)]
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
    // Note: error field exists in API but we handle errors via HTTP status/empty results
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
}

/// Price module from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub currency: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub quote_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_module() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {
                        "currency": "TWD",
                        "shortName": "WALSIN LIHWA CORP",
                        "longName": "Walsin Lihwa Corporation",
                        "quoteType": "EQUITY",
                        "regularMarketPrice": {"raw": 24.5, "fmt": "24.50"}
                    }
                }],
                "error": null
            }
        }"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let results = response.quote_summary.result.unwrap();
        let price = results[0].price.as_ref().unwrap();
        assert_eq!(price.short_name.as_deref(), Some("WALSIN LIHWA CORP"));
        assert_eq!(price.long_name.as_deref(), Some("Walsin Lihwa Corporation"));
        assert_eq!(price.currency.as_deref(), Some("TWD"));
    }

    #[test]
    fn test_deserialize_null_result() {
        let json = r#"{"quoteSummary": {"result": null, "error": {"code": "Not Found"}}}"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_none());
    }
}
