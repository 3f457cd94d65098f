//! Retell call-stats aggregation.
//!
//! Pages through the Retell list-calls API in descending order, constrained
//! server-side to `[yesterday start, now]`, and buckets the collected calls
//! into the IST today/yesterday counters.

use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::Serialize;

use crate::models::call_stats::{CallStatsResponse, CallWindow, LatestCall, RetellCall};
use crate::services::time_window::{DayBucket, TimeWindow};

pub const PER_PAGE_LIMIT: u64 = 250;
pub const MAX_RECORDS: u64 = 2000;
/// Upper bound on pagination requests; makes the loop's termination explicit.
const MAX_PAGES: u64 = MAX_RECORDS / PER_PAGE_LIMIT;
/// Wall-clock cap on the whole pagination pass.
const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[derive(Clone)]
pub struct RetellService {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ListCallsRequest {
    limit: u64,
    sort_order: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination_key: Option<String>,
    filter_criteria: FilterCriteria,
}

#[derive(Debug, Serialize)]
struct FilterCriteria {
    start_timestamp: TimestampRange,
}

#[derive(Debug, Serialize)]
struct TimestampRange {
    lower_threshold: i64,
    upper_threshold: i64,
}

impl RetellService {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Aggregate today/yesterday call counts over a fresh IST window.
    ///
    /// Any upstream failure surfaces as a single error; no partial counts
    /// are returned and nothing is retried.
    pub async fn fetch_call_stats(
        &self,
    ) -> Result<CallStatsResponse, Box<dyn std::error::Error + Send + Sync>> {
        let window = TimeWindow::compute(Utc::now());

        let calls = tokio::time::timeout(FETCH_TIMEOUT, self.collect_calls(&window))
            .await
            .map_err(|_| "Timed out fetching calls from Retell")??;

        tracing::info!("Fetched {} calls from Retell for call stats", calls.len());

        Ok(build_call_stats(&calls, &window))
    }

    async fn collect_calls(
        &self,
        window: &TimeWindow,
    ) -> Result<Vec<RetellCall>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/v2/list-calls", self.base_url);
        let mut collected: Vec<RetellCall> = Vec::new();
        let mut pagination_key: Option<String> = None;

        for page in 0..MAX_PAGES {
            let body = ListCallsRequest {
                limit: PER_PAGE_LIMIT,
                sort_order: "descending",
                pagination_key: pagination_key.take(),
                filter_criteria: FilterCriteria {
                    start_timestamp: TimestampRange {
                        lower_threshold: window.yesterday_start_utc.timestamp_millis(),
                        upper_threshold: window.now_utc_millis(),
                    },
                },
            };

            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await?;
                return Err(format!("Retell API error {}: {}", status, error_text).into());
            }

            let batch: Vec<RetellCall> = response.json().await?;
            if batch.is_empty() {
                break;
            }

            let batch_len = batch.len() as u64;
            let last_call_id = batch.last().and_then(|call| call.call_id.clone());
            collected.extend(batch);

            tracing::debug!(
                "Retell page {} returned {} calls ({} collected)",
                page + 1,
                batch_len,
                collected.len()
            );

            // A short page is the last page; past the record cap the oldest
            // calls are silently truncated (server order is descending).
            if batch_len < PER_PAGE_LIMIT || collected.len() as u64 >= MAX_RECORDS {
                break;
            }

            match last_call_id {
                Some(key) => pagination_key = Some(key),
                // Full page but no continuation key: stop rather than loop.
                None => break,
            }
        }

        Ok(collected)
    }
}

/// Bucket collected calls into the window counters and project the most
/// recent call (first element; server order is descending).
pub fn build_call_stats(calls: &[RetellCall], window: &TimeWindow) -> CallStatsResponse {
    let mut today = 0u64;
    let mut yesterday = 0u64;

    for call in calls {
        let Some(event_time) = call.event_time() else {
            continue;
        };
        match window.classify(event_time) {
            DayBucket::Today => today += 1,
            DayBucket::Yesterday => yesterday += 1,
            DayBucket::Outside => {}
        }
    }

    CallStatsResponse {
        today,
        yesterday,
        fetched: calls.len() as u64,
        window: CallWindow {
            start: window
                .yesterday_start_utc
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            end: window.now_utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        latest_call: calls.first().map(LatestCall::from_call),
    }
}
