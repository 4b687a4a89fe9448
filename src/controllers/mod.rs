pub mod audio_proxy;
pub mod csp_report;
pub mod feed;
pub mod health;
pub mod index;
pub mod search;

/// Query flags count as set when present with a non-empty value (`?debug=1`).
pub(crate) fn flag_is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
