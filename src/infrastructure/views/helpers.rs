use handlebars::{handlebars_helper, Handlebars};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9]+").expect("valid pattern"));

/// Replace every run of non-alphanumerics with a single `-`.
pub fn mangle(value: &str) -> String {
    NON_ALPHANUMERIC.replace_all(value, "-").into_owned()
}

/// Byte count as megabytes with two decimals, e.g. `1.50MB`.
pub fn bytes_to_megabytes(value: &Value) -> String {
    let bytes = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    format!("{:.2}MB", bytes / (1024.0 * 1024.0))
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

handlebars_helper!(mangle_helper: |value: str| mangle(value));
handlebars_helper!(bytes_to_megabytes_helper: |value: Json| bytes_to_megabytes(value));
handlebars_helper!(encode_uri_component_helper: |value: str| encode_uri_component(value));

pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("mangle", Box::new(mangle_helper));
    registry.register_helper("bytesToMegabytes", Box::new(bytes_to_megabytes_helper));
    registry.register_helper("encodeURIComponent", Box::new(encode_uri_component_helper));
}
