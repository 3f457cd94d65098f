//! Purchase-order wire shapes shared by the Postgres path and the direct
//! Supabase REST fallback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::timestamp::parse_db_timestamp;

/// One row of `Purchase_Order_List` as it travels over the wire. Field names
/// mirror the production Supabase columns; timestamps stay in the store's
/// naive textual form until they are needed for bucketing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(rename = "PO_ID")]
    pub po_id: String,
    #[serde(rename = "Mill_name")]
    pub mill_name: Option<String>,
    #[serde(rename = "Consignee_name")]
    pub consignee_name: Option<String>,
    #[serde(rename = "Incoming_order_timestamp")]
    pub incoming_order_timestamp: Option<String>,
    #[serde(rename = "Outgoing_order_timestamp")]
    pub outgoing_order_timestamp: Option<String>,
}

impl PurchaseOrder {
    /// Canonical event time for today/yesterday bucketing: the outgoing
    /// timestamp. Missing or unparseable keeps the order out of the window
    /// counts but not out of listings.
    pub fn event_time(&self) -> Option<DateTime<Utc>> {
        self.outgoing_order_timestamp
            .as_deref()
            .and_then(parse_db_timestamp)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderStatsResponse {
    pub today: u64,
    pub yesterday: u64,
}
