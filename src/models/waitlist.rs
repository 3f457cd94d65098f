use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct WaitlistEmailRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaitlistEmailResponse {
    pub sent: bool,
}
