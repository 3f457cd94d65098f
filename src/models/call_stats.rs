//! Wire shapes for the Retell call-stats aggregate.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Raw call record as the Retell list-calls API returns it. Every field is
/// optional; the API omits what it does not know and the shape has drifted
/// between API versions (epoch-millis pairs vs ISO created/updated strings).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetellCall {
    pub call_id: Option<String>,
    pub direction: Option<String>,
    pub to_number: Option<String>,
    pub from_number: Option<String>,
    pub call_status: Option<String>,
    pub duration_ms: Option<i64>,
    pub agent_name: Option<String>,
    pub start_timestamp: Option<i64>,
    pub end_timestamp: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl RetellCall {
    /// Canonical event time for bucketing. Candidates are tried in a fixed
    /// priority order: `start_timestamp`, `end_timestamp` (epoch millis),
    /// then `created_at`, `updated_at` (ISO-8601). A record where none
    /// parses has no event time and is skipped by the counters.
    pub fn event_time(&self) -> Option<DateTime<Utc>> {
        if let Some(ts) = self.start_timestamp.and_then(DateTime::from_timestamp_millis) {
            return Some(ts);
        }
        if let Some(ts) = self.end_timestamp.and_then(DateTime::from_timestamp_millis) {
            return Some(ts);
        }
        parse_iso(self.created_at.as_deref()).or_else(|| parse_iso(self.updated_at.as_deref()))
    }
}

fn parse_iso(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Most recent call, projected for the dashboard card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestCall {
    pub call_id: Option<String>,
    pub direction: Option<String>,
    pub to_number: Option<String>,
    pub from_number: Option<String>,
    pub status: Option<String>,
    pub duration_ms: Option<i64>,
    pub agent_name: Option<String>,
    pub timestamp: Option<String>,
}

impl LatestCall {
    pub fn from_call(call: &RetellCall) -> Self {
        Self {
            call_id: call.call_id.clone(),
            direction: call.direction.clone(),
            to_number: call.to_number.clone(),
            from_number: call.from_number.clone(),
            status: call.call_status.clone(),
            duration_ms: call.duration_ms,
            agent_name: call.agent_name.clone(),
            timestamp: call
                .event_time()
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CallWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStatsResponse {
    pub today: u64,
    pub yesterday: u64,
    pub fetched: u64,
    pub window: CallWindow,
    pub latest_call: Option<LatestCall>,
}
