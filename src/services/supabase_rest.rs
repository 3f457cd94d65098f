//! Direct PostgREST access to the Supabase project.
//!
//! Secondary transport for order data: same table, same columns, but over
//! plain HTTP with the anon API key instead of the Postgres connection.

use reqwest::Client;

use crate::models::order::PurchaseOrder;

const PURCHASE_ORDER_COLUMNS: &str =
    "PO_ID,Mill_name,Consignee_name,Incoming_order_timestamp,Outgoing_order_timestamp";

#[derive(Clone)]
pub struct SupabaseRestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseRestClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch the most recent purchase orders, `PO_ID` descending.
    pub async fn fetch_purchase_orders(
        &self,
        limit: u64,
    ) -> Result<Vec<PurchaseOrder>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/rest/v1/Purchase_Order_List", self.base_url);
        let limit_param = limit.to_string();

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Content-Type", "application/json")
            .query(&[
                ("select", PURCHASE_ORDER_COLUMNS),
                ("order", "PO_ID.desc"),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("Supabase REST error {}: {}", status, error_text).into());
        }

        let orders: Vec<PurchaseOrder> = response.json().await?;

        tracing::debug!("Supabase REST returned {} purchase orders", orders.len());

        Ok(orders)
    }
}
