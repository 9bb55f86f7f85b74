//! HTTP client for the external mailbox notification service.
//!
//! The sweeper sends one POST per expiry batch; the mailbox answers with
//! `{ "success": bool }`. A bounded request timeout keeps a stalled
//! mailbox from wedging the sweep loop.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP request timeout for a single mailbox call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for mailbox delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailboxError {
    /// The underlying HTTP request failed (network, DNS, timeout) or the
    /// acknowledgment body could not be parsed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The mailbox returned a non-2xx status code.
    #[error("Mailbox returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One refund delivery request covering a whole expiry batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailboxRequest {
    #[serde(rename = "robloxName")]
    pub roblox_name: String,
    #[serde(rename = "robloxId")]
    pub roblox_id: i64,
    /// Always `"ADD"`: the mailbox adds each payload item to its owner's
    /// mailbox.
    #[serde(rename = "type")]
    pub kind: String,
    /// One item per expired listing, each with the injected refund fields
    /// (including the recipient's `targetId`).
    pub payload: Vec<serde_json::Value>,
}

/// The mailbox acknowledgment body.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MailboxAck {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// MailboxClient
// ---------------------------------------------------------------------------

/// Sends refund batches to the configured mailbox endpoint.
#[derive(Clone)]
pub struct MailboxClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl MailboxClient {
    /// Create a client for the mailbox at `base_url`, authenticating every
    /// request with the static `auth_token` credential.
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: base_url.into(),
            auth_token: auth_token.into(),
        }
    }

    /// POST one batch and parse the acknowledgment.
    ///
    /// Any transport failure, non-2xx status, or malformed body is an
    /// error; only an explicit `{ "success": true }` counts as confirmed
    /// delivery.
    pub async fn send(&self, request: &MailboxRequest) -> Result<MailboxAck, MailboxError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("authorization", &self.auth_token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailboxError::HttpStatus(response.status().as_u16()));
        }

        let ack = response.json::<MailboxAck>().await?;
        Ok(ack)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
