use serde::{Deserialize, Serialize};

pub mod call_stats;
pub mod order;
pub mod waitlist;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
