//! Integration tests for the Retell list-calls client using wiremock
//!
//! These mock the Retell API to verify pagination halting, the record cap,
//! and error propagation.

use chrono::Utc;
use serde_json::{Value, json};
use simbly_backend::services::retell::{MAX_RECORDS, PER_PAGE_LIMIT, RetellService};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

/// A page of call records with ids `call-{start}..call-{start+count-1}`,
/// timestamped just before `now` in descending order.
fn call_page(start: usize, count: usize) -> Value {
    let now_ms = Utc::now().timestamp_millis();
    let records: Vec<Value> = (start..start + count)
        .map(|i| {
            json!({
                "call_id": format!("call-{i}"),
                "direction": "inbound",
                "to_number": "+911234567890",
                "from_number": "+919876543210",
                "call_status": "ended",
                "duration_ms": 42_000,
                "agent_name": "Collections Agent",
                "start_timestamp": now_ms - (i as i64) * 1000,
            })
        })
        .collect();
    Value::Array(records)
}

fn service(server: &MockServer) -> RetellService {
    RetellService::new("test-key".to_string(), server.uri())
}

#[tokio::test]
async fn pagination_stops_after_a_short_page() {
    let mock_server = MockServer::start().await;

    // Pages two and three are keyed off the previous page's last call id.
    Mock::given(method("POST"))
        .and(path("/v2/list-calls"))
        .and(body_partial_json(json!({"pagination_key": "call-249"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(call_page(250, 250)))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/list-calls"))
        .and(body_partial_json(json!({"pagination_key": "call-499"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(call_page(500, 100)))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    // First page: no pagination key in the body.
    Mock::given(method("POST"))
        .and(path("/v2/list-calls"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(call_page(0, 250)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = service(&mock_server).fetch_call_stats().await.unwrap();

    assert_eq!(stats.fetched, 600);
    // All records sit within the last ten minutes, so none fall outside
    // the [yesterday start, now] window.
    assert_eq!(stats.today + stats.yesterday, 600);
    assert_eq!(
        stats.latest_call.unwrap().call_id.as_deref(),
        Some("call-0")
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn pagination_stops_at_the_record_cap() {
    let mock_server = MockServer::start().await;

    // Always a full page: without the cap this would paginate forever.
    Mock::given(method("POST"))
        .and(path("/v2/list-calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(call_page(0, 250)))
        .expect(8)
        .mount(&mock_server)
        .await;

    let stats = service(&mock_server).fetch_call_stats().await.unwrap();

    assert_eq!(stats.fetched, MAX_RECORDS);
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), (MAX_RECORDS / PER_PAGE_LIMIT) as usize);
}

#[tokio::test]
async fn empty_first_page_yields_zero_counts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/list-calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = service(&mock_server).fetch_call_stats().await.unwrap();

    assert_eq!(stats.fetched, 0);
    assert_eq!(stats.today, 0);
    assert_eq!(stats.yesterday, 0);
    assert!(stats.latest_call.is_none());
}

#[tokio::test]
async fn upstream_failure_propagates_as_a_single_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/list-calls"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = service(&mock_server)
        .fetch_call_stats()
        .await
        .expect_err("upstream 500 must not produce a partial aggregate");

    assert!(err.to_string().contains("Retell API error"));
}

#[tokio::test]
async fn request_window_spans_yesterday_start_to_now() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/list-calls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    service(&mock_server).fetch_call_stats().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(body["limit"], 250);
    assert_eq!(body["sort_order"], "descending");
    let lower = body["filter_criteria"]["start_timestamp"]["lower_threshold"]
        .as_i64()
        .unwrap();
    let upper = body["filter_criteria"]["start_timestamp"]["upper_threshold"]
        .as_i64()
        .unwrap();

    // Lower bound is yesterday's IST start: between 24h and 48h before now.
    let day_ms = 24 * 60 * 60 * 1000;
    assert!(upper - lower >= day_ms, "window narrower than one day");
    assert!(upper - lower <= 2 * day_ms, "window wider than two days");
}
