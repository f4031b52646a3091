/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Litego client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod ws;

// Re-export commonly used types from auth
pub use auth::{
    AuthManager,
    Credentials,
    Session,
    SessionStore,
};

// Re-export commonly used types from http
pub use http::{
    ApiResult,
    ClientConfig,
    LitegoClient,
    LitegoError,
    Mode,
    Result,
};

// Re-export all types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{
    PaymentSubscriber,
    PaymentTopic,
};
