use crate::constants::{SEARCH_LABEL, SEARCH_PLACEHOLDER};

/// Label and the current value, or the placeholder when nothing is typed
pub fn render(value: &str) -> String {
    if value.is_empty() {
        format!("{SEARCH_LABEL}: <{SEARCH_PLACEHOLDER}>")
    } else {
        format!("{SEARCH_LABEL}: {value}")
    }
}
