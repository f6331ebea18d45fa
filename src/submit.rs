use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered {0}")]
    Status(u16),
}

/// How a contact request leaves the page. The form only sees `send`.
#[derive(Debug, Clone, PartialEq)]
pub enum Transport {
    /// Waits and reports success; nothing is sent anywhere.
    Simulated { delay_ms: u32 },
    /// JSON POST to a real endpoint.
    Http { url: String },
}

impl Transport {
    pub fn from_config() -> Self {
        match config::contact_endpoint() {
            Some(url) => Transport::Http {
                url: url.to_string(),
            },
            None => Transport::Simulated {
                delay_ms: config::SUBMIT_DELAY_MS,
            },
        }
    }

    pub async fn send(&self, request: &ContactRequest) -> Result<(), SubmitError> {
        match self {
            Transport::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                Ok(())
            }
            Transport::Http { url } => {
                let response = Request::post(url)
                    .json(request)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Status(response.status()))
                }
            }
        }
    }
}
