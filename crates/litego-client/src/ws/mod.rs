/*
[INPUT]:  Subscription topics and authentication
[OUTPUT]: Payment-event payloads over WebSocket
[POS]:    WebSocket layer - payment subscriptions
[UPDATE]: When adding new topics or changing connection logic
*/

pub mod client;

pub use client::{PaymentSubscriber, PaymentTopic};
