//! Bitlinks payload types for the Bitly v4 API.
//!
//! All types match the JSON bodies exchanged with the `/v4/bitlinks`,
//! `/v4/shorten`, and `/v4/bitlinks/{bitlink}/clicks` endpoint families.
//! Wire keys are snake_case unless renamed explicitly. Fields the service
//! marks optional are omitted from encoded output when unset — never
//! serialized as `null` or an empty string.

use serde::{Deserialize, Serialize};

// ── Bitlinks ─────────────────────────────────────────────────────────

/// Editable metadata of a Bitlink — request body for
/// `PATCH /v4/bitlinks/{bitlink}` and `POST /v4/bitlinks`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bitlink {
    pub domain: String,
    pub title: String,
    pub group_guid: String,
    pub tags: Vec<String>,
    pub deeplinks: Vec<Deeplink>,
    pub long_url: String,
}

/// Full Bitlink view — from `GET /v4/bitlinks/{bitlink}`.
///
/// Extends [`Bitlink`] with the server-assigned fields: references,
/// archival state, creation metadata, and the canonical short link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BitlinkDetails {
    pub references: References,
    pub archived: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO 8601 date-time.
    pub created_at: String,
    pub title: String,
    #[serde(default)]
    pub deeplinks: Vec<Deeplink>,
    pub created_by: String,
    pub long_url: String,
    pub client_id: String,
    #[serde(default)]
    pub custom_bitlinks: Vec<String>,
    pub link: String,
    pub id: String,
}

/// Mobile deep-link binding from a Bitlink to an in-app destination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deeplink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitlink: Option<String>,
    pub install_url: String,
    /// ISO 8601 date-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    pub app_uri_path: String,
    /// ISO 8601 date-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    pub install_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

/// A single Bitlink identifier, as a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub bitlink_id: String,
}

/// Minimal Bitlink summary — from `GET /v4/bitlinks/{bitlink}` expansions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkInfo {
    pub long_url: String,
    /// ISO 8601 date-time.
    pub created_at: String,
    pub link: String,
    pub id: String,
}

/// Free-form metadata slots populated by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct References {
    pub property1: String,
    pub property2: String,
}

/// Create a short link — request body for `POST /v4/shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub group_guid: String,
    pub domain: String,
    pub long_url: String,
}

// ── Click metrics ────────────────────────────────────────────────────

/// One time-bucketed click observation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkClick {
    /// ISO 8601 date-time for the bucket.
    pub date: String,
    pub clicks: i64,
}

/// One metric bucket, e.g. a country or referrer and its click count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metric {
    pub clicks: i64,
    pub value: String,
}

/// One referrer source and its click count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Referrer {
    pub value: i64,
    pub key: String,
}

/// Referrers grouped by the network they came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferrersByDomain {
    /// The service emits this key with a capital `R`; reproduced verbatim.
    #[serde(rename = "Referrers", default)]
    pub referrers: Vec<Referrer>,
    pub network: String,
}

/// Top-level response for every metrics endpoint.
///
/// Which fields are populated depends on the endpoint that produced the
/// response: clicks endpoints fill `link_clicks`, facet endpoints fill
/// `facet` + `metrics`, the referring-networks endpoint fills
/// `referrers_by_domain`. Everything is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_clicks: Option<i64>,
    /// ISO 8601 date-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_clicks: Vec<LinkClick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub referrers_by_domain: Vec<ReferrersByDomain>,
}

/// Query parameters for the metrics endpoints.
///
/// Not a JSON body — the transport layer appends these to the request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsRequest {
    /// A unit of time: `minute`, `hour`, `day`, `week`, `month`.
    pub unit: String,
    /// How many units of time to query. `-1` returns all units.
    pub units: i64,
    /// Most recent time to pull metrics for, ISO 8601.
    /// Defaults to the current time when unset.
    pub unit_reference: Option<String>,
    /// Quantity of items to be returned.
    pub size: i64,
}

impl MetricsRequest {
    /// Render as query pairs in the shape transport helpers consume.
    ///
    /// `unit_reference` is omitted entirely when unset; `units` is passed
    /// through unchanged, including the `-1` all-units sentinel.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("unit", self.unit.clone()),
            ("units", self.units.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(reference) = &self.unit_reference {
            pairs.push(("unit_reference", reference.clone()));
        }
        pairs
    }
}

impl Default for MetricsRequest {
    fn default() -> Self {
        Self {
            unit: "day".to_owned(),
            units: -1,
            unit_reference: None,
            size: 50,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn metrics_request_query_pairs() {
        let req = MetricsRequest {
            unit: "hour".to_owned(),
            units: 24,
            unit_reference: Some("2024-01-01T00:00:00+0000".to_owned()),
            size: 10,
        };
        assert_eq!(
            req.query_pairs(),
            vec![
                ("unit", "hour".to_owned()),
                ("units", "24".to_owned()),
                ("size", "10".to_owned()),
                ("unit_reference", "2024-01-01T00:00:00+0000".to_owned()),
            ]
        );
    }

    #[test]
    fn metrics_request_all_units_sentinel() {
        let req = MetricsRequest {
            units: -1,
            ..MetricsRequest::default()
        };
        let pairs = req.query_pairs();
        assert!(pairs.contains(&("units", "-1".to_owned())));
        assert!(!pairs.iter().any(|(k, _)| *k == "unit_reference"));
    }
}
