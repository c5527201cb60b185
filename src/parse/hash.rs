//! Deep-link fragment parsing
//!
//! The lightbox writes `#pid=<photo id>&gid=<gallery uid>` into the URL
//! while open. On load the same fragment is read back to reopen it.
//! Malformed input is dropped silently, never reported.

use serde::{Deserialize, Serialize};

/// Fragments shorter than this carry no usable parameters
const MIN_FRAGMENT_LEN: usize = 5;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HashParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,
}

impl HashParams {
    pub fn is_empty(&self) -> bool {
        self.pid.is_none() && self.gid.is_none()
    }
}

/// Parse a URL fragment, with or without the leading `#`
pub fn parse_hash(fragment: &str) -> HashParams {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut params = HashParams::default();

    if fragment.len() < MIN_FRAGMENT_LEN {
        return params;
    }

    for segment in fragment.split('&') {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        match key {
            "pid" => params.pid = Some(value.to_string()),
            "gid" => params.gid = parse_leading_int(value),
            _ => {}
        }
    }

    params
}

/// Base-10 integer from the leading digits, like JavaScript's `parseInt`
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
