/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses normalized into typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod charges;
pub mod client;
pub mod error;
pub mod merchant;
pub mod result;

pub use client::{ClientConfig, LitegoClient, Mode};
pub use error::{LitegoError, Result};
pub use result::ApiResult;
