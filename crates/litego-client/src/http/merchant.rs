/*
[INPUT]:  Merchant account operations and a bearer auth token
[OUTPUT]: Merchant, withdrawal, and webhook data as normalized API results
[POS]:    HTTP layer - merchant account endpoints (require auth token)
[UPDATE]: When adding new merchant endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{ApiResult, LitegoClient, Result};
use crate::types::{
    Merchant, NotificationUrl, Page, PageFilter, ReferralPayment, WebhookResponse,
    WithdrawalAddress, WithdrawalFilter, WithdrawalSettings, WithdrawalTransaction,
};

const MERCHANT_API_URL: &str = "/api/v1/merchant/me";
const WITHDRAWAL_SET_API_URL: &str = "/api/v1/merchant/me/withdrawal/address";
const WITHDRAWAL_TRIGGER_API_URL: &str = "/api/v1/merchant/me/withdrawal/manual";
const WITHDRAWAL_LIST_API_URL: &str = "/api/v1/merchant/me/withdrawals";
const WITHDRAWAL_SETTINGS_API_URL: &str = "/api/v1/merchant/withdrawal/settings";
const WEBHOOK_SET_URL_API_URL: &str = "/api/v1/merchant/me/notification-url";
const WEBHOOK_LIST_RESPONSES_API_URL: &str = "/api/v1/merchant/me/notification-responses";
const REFERRAL_PAYMENTS_API_URL: &str = "/api/v1/merchant/me/referral-payments";

impl LitegoClient {
    /// Get information about the authenticated merchant
    ///
    /// GET /api/v1/merchant/me
    pub async fn get_merchant(&self, auth_token: &str) -> Result<ApiResult<Merchant>> {
        let builder = self.api_request_with_auth(Method::GET, MERCHANT_API_URL, auth_token)?;
        self.send(builder).await
    }

    /// Set the withdrawal address (or an extended public key, from which a
    /// fresh address is derived after each withdrawal)
    ///
    /// POST /api/v1/merchant/me/withdrawal/address
    pub async fn set_withdrawal_address(
        &self,
        auth_token: &str,
        kind: &str,
        value: &str,
    ) -> Result<ApiResult<WithdrawalAddress>> {
        let body = serde_json::json!({
            "type": kind,
            "value": value,
        });

        let builder = self
            .api_request_with_auth(Method::POST, WITHDRAWAL_SET_API_URL, auth_token)?
            .json(&body);
        self.send(builder).await
    }

    /// Trigger a withdrawal manually
    ///
    /// PUT /api/v1/merchant/me/withdrawal/manual
    pub async fn trigger_withdrawal(
        &self,
        auth_token: &str,
    ) -> Result<ApiResult<WithdrawalTransaction>> {
        let builder =
            self.api_request_with_auth(Method::PUT, WITHDRAWAL_TRIGGER_API_URL, auth_token)?;
        self.send(builder).await
    }

    /// List withdrawal transactions
    ///
    /// GET /api/v1/merchant/me/withdrawals?page={page}&size={size}&status={status}
    pub async fn list_withdrawals(
        &self,
        auth_token: &str,
        filter: &WithdrawalFilter,
    ) -> Result<ApiResult<Page<WithdrawalTransaction>>> {
        let endpoint = format!("{}{}", WITHDRAWAL_LIST_API_URL, filter.to_query());
        let builder = self.api_request_with_auth(Method::GET, &endpoint, auth_token)?;
        self.send(builder).await
    }

    /// Get the service-wide withdrawal fee settings
    ///
    /// GET /api/v1/merchant/withdrawal/settings
    pub async fn withdrawal_settings(
        &self,
        auth_token: &str,
    ) -> Result<ApiResult<WithdrawalSettings>> {
        let builder =
            self.api_request_with_auth(Method::GET, WITHDRAWAL_SETTINGS_API_URL, auth_token)?;
        self.send(builder).await
    }

    /// Set the webhook notification URL
    ///
    /// POST /api/v1/merchant/me/notification-url
    pub async fn set_notification_url(
        &self,
        auth_token: &str,
        url: &str,
    ) -> Result<ApiResult<NotificationUrl>> {
        let body = serde_json::json!({ "url": url });

        let builder = self
            .api_request_with_auth(Method::POST, WEBHOOK_SET_URL_API_URL, auth_token)?
            .json(&body);
        self.send(builder).await
    }

    /// List responses recorded from webhook deliveries
    ///
    /// GET /api/v1/merchant/me/notification-responses?page={page}&size={size}
    pub async fn list_webhook_responses(
        &self,
        auth_token: &str,
        filter: &PageFilter,
    ) -> Result<ApiResult<Page<WebhookResponse>>> {
        let endpoint = format!("{}{}", WEBHOOK_LIST_RESPONSES_API_URL, filter.to_query());
        let builder = self.api_request_with_auth(Method::GET, &endpoint, auth_token)?;
        self.send(builder).await
    }

    /// List referral payments
    ///
    /// GET /api/v1/merchant/me/referral-payments?page={page}&size={size}
    pub async fn list_referral_payments(
        &self,
        auth_token: &str,
        filter: &PageFilter,
    ) -> Result<ApiResult<Page<ReferralPayment>>> {
        let endpoint = format!("{}{}", REFERRAL_PAYMENTS_API_URL, filter.to_query());
        let builder = self.api_request_with_auth(Method::GET, &endpoint, auth_token)?;
        self.send(builder).await
    }
}
