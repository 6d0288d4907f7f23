use crate::global_variables::{DIRECTIONS_URL_BASE, NAVIGATE_URL_BASE};
use serde::{Deserialize, Serialize};

/// Deep links into third-party map apps, built from the raw location text.
/// Nothing here checks that the text names a real place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLinks {
    pub directions: String,
    pub navigate: String,
}

impl MapLinks {
    pub fn for_route(start: &str, end: &str) -> Self {
        let start = encode_uri_component(start);
        let end = encode_uri_component(end);
        Self {
            directions: format!("{}{}/{}", DIRECTIONS_URL_BASE, start, end),
            navigate: format!("{}&ll={}&q={}", NAVIGATE_URL_BASE, end, end),
        }
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encodes UTF-8 bytes the way browsers' `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}
