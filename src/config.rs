//! Process-wide configuration, read from the environment once at startup.
//!
//! Services receive their keys through constructors; nothing reads the
//! environment mid-request. The two upstream API keys are optional so the
//! server can still boot and serve the database-backed endpoints without
//! them; the owning handler answers 500 when its key is absent.

use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub retell_api_key: Option<String>,
    pub retell_base_url: String,
    pub resend_api_key: Option<String>,
    pub resend_from_email: String,
    pub resend_base_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            retell_api_key: env::var("RETELL_API_KEY").ok().filter(|k| !k.is_empty()),
            retell_base_url: env::var("RETELL_BASE_URL")
                .unwrap_or_else(|_| "https://api.retellai.com".to_string()),
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            resend_from_email: env::var("RESEND_FROM_EMAIL")
                .unwrap_or_else(|_| "support@simblyai.com".to_string()),
            resend_base_url: env::var("RESEND_BASE_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            supabase_url: env::var("SUPABASE_URL").expect("SUPABASE_URL must be set"),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .expect("SUPABASE_ANON_KEY must be set"),
        }
    }
}
