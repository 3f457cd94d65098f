//! Waitlist confirmation email via the Resend API.

use reqwest::Client;
use serde::Serialize;

#[derive(Clone)]
pub struct ResendService {
    client: Client,
    api_key: String,
    from_email: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

impl ResendService {
    pub fn new(api_key: String, from_email: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from_email,
            base_url,
        }
    }

    pub async fn send_waitlist_email(
        &self,
        full_name: Option<&str>,
        email: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let greeting = full_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("there");

        let payload = SendEmailRequest {
            from: format!("SimblyAI <{}>", self.from_email),
            to: vec![email.to_string()],
            subject: "Thanks for joining the waitlist!".to_string(),
            html: format!(
                "<p>Hi {},</p><p>Thanks for signing up. We'll get back to you shortly!</p>",
                greeting
            ),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("Resend API error {}: {}", status, error_text).into());
        }

        tracing::info!("Sent waitlist confirmation to {}", email);

        Ok(())
    }
}
