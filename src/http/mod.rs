//! Server calls issued by the inline editor
//!
//! [`request`] describes each call as plain data so edit logic can be tested
//! without a browser; [`client`] sends them with `fetch`.

pub mod request;
pub mod client;

pub use request::{ApiRequest, Method};
