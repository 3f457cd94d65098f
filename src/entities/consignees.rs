//! SeaORM Entity for consignees (`Hawa_Consignee`)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Hawa_Consignee")]
pub struct Model {
    /// App-assigned id; new rows take highest existing id + 1
    #[sea_orm(primary_key, auto_increment = false, column_name = "Consignee_id")]
    #[serde(rename = "Consignee_id")]
    pub consignee_id: i32,
    #[sea_orm(column_name = "Consignee_name")]
    #[serde(rename = "Consignee_name")]
    pub consignee_name: Option<String>,
    #[sea_orm(column_name = "Consignee_address")]
    #[serde(rename = "Consignee_address")]
    pub consignee_address: Option<String>,
    #[sea_orm(column_name = "Consignee_GSTIN")]
    #[serde(rename = "Consignee_GSTIN")]
    pub consignee_gstin: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
