/*
[INPUT]:  Payment topic, bearer auth token, and connect/receive timeout
[OUTPUT]: One payment-event payload per subscription
[POS]:    WebSocket layer - single-shot payment subscription
[UPDATE]: When the subscription handshake or topic scheme changes
*/

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::time;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, info};

use crate::http::{LitegoError, Mode, Result};

const WS_SUBSCRIBE_PAYMENTS_API_URL: &str = "/api/v1/payments/subscribe";

/// Scope of a payment subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentTopic {
    /// Payment events for every charge of the merchant
    AllPayments,
    /// The payment event of a single charge
    SingleCharge(String),
}

impl PaymentTopic {
    fn endpoint(&self) -> String {
        match self {
            PaymentTopic::AllPayments => WS_SUBSCRIBE_PAYMENTS_API_URL.to_string(),
            PaymentTopic::SingleCharge(charge_id) => {
                format!("{}/{}", WS_SUBSCRIBE_PAYMENTS_API_URL, charge_id)
            }
        }
    }
}

/// Opens single-use WebSocket subscriptions for payment events.
///
/// Each `subscribe` call owns one connection: it delivers exactly one
/// non-empty payload (or fails) and closes the socket. A caller wanting
/// further events subscribes again.
#[derive(Debug, Clone)]
pub struct PaymentSubscriber {
    base_url: String,
}

impl PaymentSubscriber {
    /// Create a subscriber for the given environment
    pub fn new(mode: Mode) -> Self {
        Self {
            base_url: mode.ws_base_url().to_string(),
        }
    }

    /// Create a subscriber pointed at an explicit WebSocket base URL
    /// (tests use this to target an in-process server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Block until the first payment event for `topic` arrives and return
    /// its JSON payload.
    ///
    /// The connect wait and every receive wait are bounded by `timeout`.
    /// An empty handshake frame is sent after connecting; incoming frames
    /// that trim to empty are keepalives and are discarded. The connection
    /// is closed before returning, success or not.
    pub async fn subscribe(
        &self,
        topic: &PaymentTopic,
        auth_token: &str,
        timeout: Duration,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, topic.endpoint());
        let mut request = url
            .into_client_request()
            .map_err(|e| LitegoError::WebSocket(e.to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {auth_token}"))
            .map_err(|e| LitegoError::Config(format!("Invalid auth token header: {e}")))?;
        request.headers_mut().insert(AUTHORIZATION, bearer);

        let (ws_stream, _response) = time::timeout(timeout, connect_async(request))
            .await
            .map_err(|_| LitegoError::Timeout {
                duration: timeout.as_secs(),
            })?
            .map_err(|e| LitegoError::WebSocket(e.to_string()))?;

        debug!(topic = ?topic, "payment subscription opened");

        let (mut write, mut read) = ws_stream.split();

        // Empty frame handshake expected by the server
        write
            .send(WsMessage::Text(String::new().into()))
            .await
            .map_err(|e| LitegoError::WebSocket(e.to_string()))?;

        let payload = loop {
            let incoming =
                time::timeout(timeout, read.next())
                    .await
                    .map_err(|_| LitegoError::Timeout {
                        duration: timeout.as_secs(),
                    })?;

            match incoming {
                Some(Ok(WsMessage::Text(text))) => {
                    let trimmed = text.as_str().trim();
                    if trimmed.is_empty() {
                        debug!("discarding empty frame");
                        continue;
                    }
                    break trimmed.to_string();
                }
                Some(Ok(WsMessage::Binary(bytes))) => {
                    let Ok(text) = String::from_utf8(bytes.to_vec()) else {
                        debug!("discarding non-utf8 binary frame");
                        continue;
                    };
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    break trimmed.to_string();
                }
                Some(Ok(WsMessage::Ping(_))) | Some(Ok(WsMessage::Pong(_))) => {}
                Some(Ok(WsMessage::Close(_))) | None => {
                    return Err(LitegoError::WebSocket(
                        "connection closed before a payment event arrived".to_string(),
                    ));
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(LitegoError::WebSocket(e.to_string())),
            }
        };

        info!(topic = ?topic, bytes = payload.len(), "payment event received");

        // Single-use handle: best-effort close, the payload is already ours
        let _ = write.send(WsMessage::Close(None)).await;

        Ok(payload)
    }
}
