//! Error handling for the gateway
//!
//! A single error enum covers every failure class. Only validation, auth and
//! rate-limit errors reach clients verbatim; everything else is reported with
//! a stable code and a generic message.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, SentimentError};
