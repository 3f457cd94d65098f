//! SeaORM Entity for purchase orders
//!
//! Maps the production `Purchase_Order_List` table; timestamps are naive
//! (`timestamp` without zone) and are assumed to hold UTC.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Purchase_Order_List")]
pub struct Model {
    /// Human-assigned order id ("PO-073" form)
    #[sea_orm(primary_key, auto_increment = false, column_name = "PO_ID")]
    #[serde(rename = "PO_ID")]
    pub po_id: String,
    #[sea_orm(column_name = "Mill_name")]
    #[serde(rename = "Mill_name")]
    pub mill_name: Option<String>,
    #[sea_orm(column_name = "Consignee_name")]
    #[serde(rename = "Consignee_name")]
    pub consignee_name: Option<String>,
    #[sea_orm(column_name = "Incoming_order_timestamp")]
    #[serde(rename = "Incoming_order_timestamp")]
    pub incoming_order_timestamp: Option<DateTime>,
    #[sea_orm(column_name = "Outgoing_order_timestamp")]
    #[serde(rename = "Outgoing_order_timestamp")]
    pub outgoing_order_timestamp: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
