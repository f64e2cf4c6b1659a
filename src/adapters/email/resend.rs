use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::school::LicenceMailer,
};

/// Sends licence numbers through the Resend HTTP API. Any failure maps to
/// `AppError::Delivery` so signup can run its compensating rollback.
#[derive(Clone)]
pub struct ResendLicenceMailer {
    client: Client,
    api_key: secrecy::SecretString,
    from: String,
}

impl ResendLicenceMailer {
    pub fn new(api_key: secrecy::SecretString, from: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

fn licence_email_html(school_name: &str, licence: &str) -> String {
    format!(
        "<p>Welcome, {school_name}!</p>\
         <p>Your licence number is <strong>{licence}</strong>.</p>\
         <p>Present it once to activate your account, then sign in with your \
         email and password.</p>"
    )
}

#[async_trait]
impl LicenceMailer for ResendLicenceMailer {
    async fn send_licence(&self, to: &str, school_name: &str, licence: &str) -> AppResult<()> {
        let html = licence_email_html(school_name, licence);
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject: "Your Licence Number",
            html: &html,
        };
        self.client
            .post("https://api.resend.com/emails")
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Delivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Delivery(e.to_string()))?;
        Ok(())
    }
}
