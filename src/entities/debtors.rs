//! SeaORM Entity for the debtor follow-up list (`debtor_list`)
//!
//! Call-tracking columns are filled in by the voice-AI workflow after each
//! collection call.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "debtor_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Consignee_name")]
    #[serde(rename = "Consignee_name")]
    pub consignee_name: String,
    #[sea_orm(column_name = "Consignee_Contact_name")]
    #[serde(rename = "Consignee_Contact_name")]
    pub consignee_contact_name: Option<String>,
    pub phone_number: Option<String>,
    pub follow_up_date: Option<Date>,
    pub payment_status: Option<String>,
    pub call_transcript: Option<String>,
    pub call_summary: Option<String>,
    pub call_recording: Option<String>,
    pub call_count: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
