use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static ENCODED_HTTP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?%3A%2F%2F").expect("valid prefix pattern"));

/// Undo one extra level of percent-encoding on a feed URL.
///
/// Some clients encode the `url` parameter twice, so after query decoding it
/// still reads `http%3A%2F%2F...`. Only that prefix triggers a second decode;
/// anything else is returned unchanged, including values that fail to decode.
pub fn decode_feed_url(raw: &str) -> Cow<'_, str> {
    if !ENCODED_HTTP_PREFIX.is_match(raw) {
        return Cow::Borrowed(raw);
    }

    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(url = raw, error = %e, "Could not decode feed url, using it as-is");
            Cow::Borrowed(raw)
        }
    }
}
