/// Path of `name` directly under `parent`.
///
/// Children of the root are named without a separator prefix.
pub fn child_path(parent: &str, name: &str) -> String {
    if is_root(parent) {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Returns `true` for the namespace root.
pub fn is_root(path: &str) -> bool {
    path.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_children_have_no_separator() {
        assert_eq!(child_path("", "a.txt"), "a.txt");
    }

    #[test]
    fn nested_children_are_slash_joined() {
        assert_eq!(child_path("sub", "x.bin"), "sub/x.bin");
        assert_eq!(child_path("sub/deeper", "x.bin"), "sub/deeper/x.bin");
    }
}
