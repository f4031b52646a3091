/*
[INPUT]:  Merchant credentials and session state
[OUTPUT]: Authentication lifecycle management
[POS]:    Auth layer - module wiring
[UPDATE]: When auth components change
*/

pub mod manager;
pub mod session;

pub use manager::AuthManager;
pub use session::{Credentials, Session, SessionStore};
