// Bitlinks payload layer for the Bitly v4 API.
//
// Declares every request/response record used against the /v4/bitlinks
// endpoints and the JSON codec that moves them on and off the wire.
// Transport, auth, and retry live in the consuming client, not here.

pub mod codec;
pub mod types;

pub use codec::{decode, encode};
pub use types::{
    Bitlink, BitlinkDetails, Deeplink, Link, LinkClick, LinkInfo, Metric, Metrics,
    MetricsRequest, References, Referrer, ReferrersByDomain, ShortenRequest,
};
