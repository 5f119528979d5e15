//! Contact delivery — pluggable, trait-based collaborator.
//!
//! Default: `SimulatedContactSender` (fixed delay, always accepts).
//! With `CONTACT_ENDPOINT` set: `HttpContactSender` posts the fields as JSON.
//!
//! Neither backend retries; a failure is reported once to the form.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::contact::validation::ContactFields;
use crate::errors::ContactError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// The delivery trait. Implement this to swap transports without touching
/// the form or the session.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn submit(&self, fields: &ContactFields) -> Result<(), ContactError>;
}

/// Picks the delivery backend from configuration.
pub fn sender_from_config(config: &Config) -> Result<Arc<dyn ContactSender>, ContactError> {
    match &config.contact_endpoint {
        Some(endpoint) => {
            info!("Contact delivery: HTTP endpoint {endpoint}");
            Ok(Arc::new(HttpContactSender::new(endpoint.clone())?))
        }
        None => {
            info!(
                "Contact delivery: simulated ({}ms delay)",
                config.submit_delay.as_millis()
            );
            Ok(Arc::new(SimulatedContactSender::new(config.submit_delay)))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SimulatedContactSender
// ────────────────────────────────────────────────────────────────────────────

/// Accepts every message after a fixed delay. No network call.
#[derive(Debug, Clone)]
pub struct SimulatedContactSender {
    delay: Duration,
}

impl SimulatedContactSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedContactSender {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl ContactSender for SimulatedContactSender {
    async fn submit(&self, fields: &ContactFields) -> Result<(), ContactError> {
        tokio::time::sleep(self.delay).await;
        debug!(
            "Simulated contact delivery accepted ({} message chars)",
            fields.message.chars().count()
        );
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HttpContactSender
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Posts `{name, email, message}` to an HTTP endpoint (form relay, mail API).
#[derive(Debug, Clone)]
pub struct HttpContactSender {
    client: Client,
    endpoint: String,
}

impl HttpContactSender {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ContactError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ContactError::NotConfigured);
        }

        Ok(Self {
            client: Client::builder().timeout(HTTP_TIMEOUT).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSender for HttpContactSender {
    async fn submit(&self, fields: &ContactFields) -> Result<(), ContactError> {
        let payload = ContactPayload {
            name: fields.name.trim(),
            email: fields.email.trim(),
            message: fields.message.trim(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Contact endpoint returned {status}: {message}");
            return Err(ContactError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Contact endpoint accepted message ({status})");
        Ok(())
    }
}
