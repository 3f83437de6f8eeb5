//! JSON codec for the bitlinks payload types.
//!
//! Stateless, single-pass transforms between in-memory records and the
//! wire encoding. Errors go back to the caller untouched; nothing here
//! retries, logs failures, or performs I/O.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use super::types::{Bitlink, BitlinkDetails, Link, LinkInfo, Metrics, ShortenRequest};
use crate::Error;

/// Encode a request payload to its wire JSON bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    let bytes = serde_json::to_vec(value).map_err(|e| Error::Encoding {
        message: e.to_string(),
    })?;
    trace!(len = bytes.len(), "encoded request payload");
    Ok(bytes)
}

/// Decode wire JSON bytes into a response payload.
///
/// Fails on malformed JSON and on structural mismatches alike; never
/// yields a partially populated record.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    let value = serde_json::from_slice(bytes).map_err(|e| Error::Decoding {
        message: e.to_string(),
        body: String::from_utf8_lossy(bytes).into_owned(),
    })?;
    trace!(len = bytes.len(), "decoded response payload");
    Ok(value)
}

// ── Outbound request shapes ──────────────────────────────────────────

impl Bitlink {
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        encode(self)
    }
}

impl BitlinkDetails {
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        encode(self)
    }
}

impl Link {
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        encode(self)
    }
}

impl ShortenRequest {
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        encode(self)
    }
}

// ── Inbound response shapes ──────────────────────────────────────────

impl BitlinkDetails {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        decode(bytes)
    }
}

impl LinkInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        decode(bytes)
    }
}

impl Metrics {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        decode(bytes)
    }
}
