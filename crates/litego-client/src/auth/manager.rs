/*
[INPUT]:  Merchant credentials and HTTP client
[OUTPUT]: Renewable authenticated session (auth + refresh tokens)
[POS]:    Auth layer - orchestrates the authentication lifecycle
[UPDATE]: When auth endpoints or the fallback policy change
*/

use reqwest::Method;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::http::{ApiResult, LitegoClient, LitegoError, Result};
use crate::types::{AuthTokens, RefreshedToken};

use super::{Credentials, SessionStore};

const AUTHENTICATE_API_URL: &str = "/api/v1/merchant/authenticate";
const REFRESH_TOKEN_API_URL: &str = "/api/v1/merchant/me/refresh-auth";

/// Error name the service reports for an expired or invalid refresh token.
/// This is the only failure that permits the authenticate fallback.
const FORBIDDEN_ERROR_NAME: &str = "Forbidden";

/// Manages the authentication lifecycle: token acquisition, renewal, and
/// the single-hop fallback to full re-authentication.
#[derive(Debug)]
pub struct AuthManager {
    client: LitegoClient,
    credentials: Credentials,
    session: SessionStore,
    // Serializes refresh attempts so concurrent callers cannot both
    // discover an expired token and issue duplicate re-auth calls.
    refresh_guard: Mutex<()>,
}

impl AuthManager {
    /// Create a new auth manager with an empty session
    pub fn new(client: LitegoClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
            session: SessionStore::new(),
            refresh_guard: Mutex::new(()),
        }
    }

    /// Session state holding the current token pair
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Exchange merchant credentials for a fresh token pair
    ///
    /// POST /api/v1/merchant/authenticate
    pub async fn authenticate(&self) -> Result<ApiResult<AuthTokens>> {
        let body = serde_json::json!({
            "merchant_id": self.credentials.merchant_id,
            "secret_key": self.credentials.secret_key,
        });

        let builder = self
            .client
            .api_request(Method::POST, AUTHENTICATE_API_URL)?
            .json(&body);
        let result: ApiResult<AuthTokens> = self.client.send(builder).await?;

        if let ApiResult::Success { value, .. } = &result {
            self.session
                .set_tokens(&value.auth_token, &value.refresh_token);
            info!("merchant authenticated");
        }

        Ok(result)
    }

    /// Obtain a new auth token using the refresh token as bearer credential.
    /// The refresh token itself is not rotated by this endpoint.
    ///
    /// PUT /api/v1/merchant/me/refresh-auth
    pub async fn refresh_auth_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResult<RefreshedToken>> {
        let builder =
            self.client
                .api_request_with_auth(Method::PUT, REFRESH_TOKEN_API_URL, refresh_token)?;
        let result: ApiResult<RefreshedToken> = self.client.send(builder).await?;

        if let ApiResult::Success { value, .. } = &result {
            self.session.set_tokens(&value.auth_token, refresh_token);
            debug!("auth token refreshed");
        }

        Ok(result)
    }

    /// Renew the session, falling back to full authentication at most once.
    ///
    /// Two sequential steps, never a loop:
    /// 1. a held refresh token is tried first; success returns the new auth
    ///    token paired with that same refresh token
    /// 2. only a `"Forbidden"` refresh failure (expired refresh token), or
    ///    holding no refresh token at all, proceeds to `authenticate`
    ///
    /// Any other failure at either step is fatal for the session and
    /// surfaces as `LitegoError::Authentication`.
    pub async fn reauthenticate(&self) -> Result<AuthTokens> {
        let _guard = self.refresh_guard.lock().await;

        let held = self.session.refresh_token().filter(|t| !t.is_empty());
        if let Some(refresh_token) = held {
            match self.refresh_auth_token(&refresh_token).await? {
                ApiResult::Success { value, .. } => {
                    return Ok(AuthTokens {
                        auth_token: value.auth_token,
                        refresh_token,
                    });
                }
                ApiResult::Failure {
                    code,
                    error_name,
                    error_message,
                } => {
                    if error_name != FORBIDDEN_ERROR_NAME {
                        return Err(LitegoError::Authentication {
                            message: format!(
                                "refresh auth token failed ({code} {error_name}): {error_message}"
                            ),
                        });
                    }
                    debug!("refresh token expired, falling back to authenticate");
                }
            }
        }

        match self.authenticate().await? {
            ApiResult::Success { value, .. } => Ok(value),
            ApiResult::Failure {
                code,
                error_name,
                error_message,
            } => Err(LitegoError::Authentication {
                message: format!("authenticate failed ({code} {error_name}): {error_message}"),
            }),
        }
    }
}
