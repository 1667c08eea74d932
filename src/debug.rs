//! Human-readable dumps of request and response bodies.

use tracing::debug;

pub(crate) const REQUEST_TITLE: &str = "Request JSON";
pub(crate) const RESPONSE_TITLE: &str = "Response JSON";

/// Emit `url` and `body` at debug level. Bodies that are not UTF-8 are skipped.
pub fn dump(url: &str, body: &[u8], title: &str) {
    let Ok(json) = std::str::from_utf8(body) else {
        return;
    };
    debug!(target: "restwire::dump", url, "{} : {}", title, json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_accepts_any_bytes() {
        dump("https://api.example.com/users", br#"{"id":1}"#, REQUEST_TITLE);
        dump("https://api.example.com/users", &[0xff, 0xfe], RESPONSE_TITLE);
    }
}
