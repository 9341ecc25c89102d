//! Wiremock responder that serves a paginated tutor directory.

use std::str::FromStr;

use serde_json::json;
use wiremock::{Request, Respond, ResponseTemplate};

/// Number of tutors the fake directory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TutorCount(u32);

impl TutorCount {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for TutorCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// HTTP status the fake API answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusCode(u16);

impl StatusCode {
    pub(crate) const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for StatusCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>().map(Self)
    }
}

/// Serves `total` tutors, slicing by the `page` and `limit` query parameters.
pub(crate) struct TutorDirectory {
    pub(crate) subject: &'static str,
    pub(crate) total: u32,
}

fn query_number(request: &Request, key: &str, default: u32) -> u32 {
    request
        .url
        .query_pairs()
        .find(|(name, _)| name == key)
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(default)
}

impl Respond for TutorDirectory {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let page = query_number(request, "page", 1).max(1);
        let limit = query_number(request, "limit", 10).max(1);
        let start = (page - 1).saturating_mul(limit).min(self.total);
        let end = start.saturating_add(limit).min(self.total);

        let items: Vec<serde_json::Value> = (start..end)
            .map(|index| {
                let number = index + 1;
                json!({
                    "id": format!("t-{number}"),
                    "name": format!("Tutor {number}"),
                    "subjects": [self.subject],
                    "hourly_rate": 30,
                    "mode": "online",
                    "rating": {"average": 4.0, "count": 3}
                })
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "items": items,
            "total": self.total,
            "page": page,
            "limit": limit
        }))
    }
}
