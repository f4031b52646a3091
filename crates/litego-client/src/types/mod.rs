/*
[INPUT]:  Request and response type definitions
[OUTPUT]: Typed structs shared by the HTTP and auth layers
[POS]:    Data layer - module wiring
[UPDATE]: When API schema changes or new types added
*/

pub mod requests;
pub mod responses;

pub use requests::{ChargeFilter, PageFilter, WithdrawalFilter, WithdrawalStatus};
pub use responses::{
    AuthTokens, Charge, Merchant, NotificationUrl, Page, ReferralPayment, RefreshedToken,
    WebhookResponse, WithdrawalAddress, WithdrawalSettings, WithdrawalTransaction,
};
