//! SeaORM Entity for supplier mills (`Hawa_MillName`)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Hawa_MillName")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Mill_id")]
    #[serde(rename = "Mill_id")]
    pub mill_id: i32,
    #[sea_orm(column_name = "Mill_name")]
    #[serde(rename = "Mill_name")]
    pub mill_name: Option<String>,
    #[sea_orm(column_name = "Mill_email")]
    #[serde(rename = "Mill_email")]
    pub mill_email: Option<String>,
    /// Comma-separated match keywords used when routing incoming order mail
    #[sea_orm(column_name = "Mill_keywords")]
    #[serde(rename = "Mill_keywords")]
    pub mill_keywords: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
