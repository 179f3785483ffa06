//! Label to url derivation for pages, links and menu items.

/// Lowercase the label and replace every run of whitespace with a single `-`.
/// Surrounding whitespace is dropped.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Site-relative page url for a label, e.g. `"Gov AI"` -> `"/gov-ai"`.
pub fn page_url(label: &str) -> String {
    format!("/{}", slugify(label))
}
