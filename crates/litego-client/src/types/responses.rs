/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed success payloads with best-effort field extraction
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

// Every struct here is container-level `#[serde(default)]`: the normalizer
// only trusts the status code, so a field the server omitted degrades to an
// empty value instead of failing the whole call.

/// Token pair issued by the authenticate endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthTokens {
    pub auth_token: String,
    pub refresh_token: String,
}

/// New auth token issued by the refresh endpoint (refresh token unchanged)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshedToken {
    pub auth_token: String,
}

/// Authenticated merchant account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub available_balance_satoshi: i64,
    pub pending_withdrawal_satoshi: i64,
    pub withdrawn_total_satoshi: i64,
    pub withdrawal_address: Option<WithdrawalAddress>,
    pub notification_url: Option<String>,
    pub object: String,
}

/// A requested payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Charge {
    pub id: String,
    pub merchant_id: String,
    pub description: String,
    pub amount: serde_json::Value,
    pub amount_satoshi: i64,
    pub payment_request: String,
    pub paid: bool,
    pub created: String,
    pub expiry_seconds: i64,
    pub object: String,
}

/// One page of a list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T: Default> {
    pub data: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub count: u32,
    pub object: String,
}

/// Configured withdrawal target (plain address or xpub)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawalAddress {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub xpub_key: String,
    pub object: String,
}

/// A balance transfer to the merchant's withdrawal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawalTransaction {
    pub transaction_id: String,
    #[serde(rename = "merchantId")]
    pub merchant_id: String,
    pub status: String,
    pub total_amount: i64,
    pub relative_fee: f64,
    pub manual_fee: f64,
    pub created_at: String,
    pub status_changed_at: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub object: String,
}

/// Service-wide withdrawal fee settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawalSettings {
    pub withdrawal_fee: f64,
    pub withdrawal_manual_fee: f64,
    pub withdrawal_min_amount: i64,
}

/// Configured webhook notification URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationUrl {
    pub url: String,
    pub object: String,
}

/// One recorded webhook delivery attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookResponse {
    pub charge_id: String,
    pub url: String,
    pub response_code: i32,
    pub created: String,
}

/// One payment credited through the referral program
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralPayment {
    pub id: String,
    pub merchant_id: String,
    pub amount_satoshi: i64,
    pub status: String,
    pub created_at: String,
}
