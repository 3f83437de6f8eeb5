// bitly-api: request/response payload types and JSON codec for the Bitly v4 API

pub mod bitlinks;
pub mod error;

pub use error::Error;
