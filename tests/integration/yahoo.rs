//! Integration tests for the Yahoo chart API provider

use sentinel::services::market_data::MarketDataProvider;
use sentinel::services::yahoo::YahooFinanceProvider;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chart_body() -> serde_json::Value {
    serde_json::json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "BBCA.JK", "currency": "IDR" },
                "timestamp": [1_700_000_000, 1_700_086_400, 1_700_172_800],
                "indicators": {
                    "quote": [{
                        "open":   [10_000.0, 10_100.0, null],
                        "high":   [10_200.0, 10_300.0, null],
                        "low":    [9_900.0, 10_000.0, null],
                        "close":  [10_150.0, 10_250.0, null],
                        "volume": [55_000_000.0, 61_000_000.0, null]
                    }]
                }
            }],
            "error": null
        }
    })
}

#[tokio::test]
async fn parses_candles_and_drops_null_periods() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BBCA.JK"))
        .and(query_param("range", "1mo"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
        .mount(&server)
        .await;

    let provider = YahooFinanceProvider::with_base_url(server.uri());
    let candles = provider.get_candles("BBCA.JK", "1mo").await.unwrap();

    // The third, null-padded period is dropped.
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].close, 10_150.0);
    assert_eq!(candles[1].volume, 61_000_000.0);
    assert!(candles[0].timestamp < candles[1].timestamp);
}

#[tokio::test]
async fn chart_error_payload_is_an_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "chart": {
            "result": null,
            "error": { "code": "Not Found", "description": "No data found" }
        }
    });
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE.JK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = YahooFinanceProvider::with_base_url(server.uri());
    assert!(provider.get_candles("NOPE.JK", "1mo").await.is_err());
}

#[tokio::test]
async fn http_failure_is_an_error_not_a_panic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BBRI.JK"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = YahooFinanceProvider::with_base_url(server.uri());
    assert!(provider.get_candles("BBRI.JK", "1mo").await.is_err());
}

#[tokio::test]
async fn empty_result_list_is_an_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "chart": { "result": [], "error": null } });
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/TINS.JK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = YahooFinanceProvider::with_base_url(server.uri());
    assert!(provider.get_candles("TINS.JK", "1mo").await.is_err());
}
