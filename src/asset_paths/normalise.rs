/// Convert a user supplied path into asset path form.
///
/// Backslashes become forward slashes, empty segments are dropped and the result never starts
/// or ends with a separator. `"/"` and `""` both normalise to the root.
pub fn normalise_asset_path(raw: &str) -> String {
    raw.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
