// src/lib.rs

use sea_orm::DatabaseConnection;
use services::{order_stats::OrderStatsService, resend::ResendService, retell::RetellService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub retell: Option<RetellService>,
    pub resend: Option<ResendService>,
    pub order_stats: OrderStatsService,
}

pub mod entities {
    pub mod prelude;
    pub mod consignees;
    pub mod debtors;
    pub mod purchase_orders;
    pub mod suppliers;
}

pub mod services {
    pub mod order_stats;
    pub mod resend;
    pub mod retell;
    pub mod supabase_rest;
    pub mod time_window;
    pub mod timestamp;
}

pub mod config;
pub mod handlers;
pub mod models;
