//! Cosmetic working directory rules for `cd`.
//!
//! Nothing here touches a real filesystem: every string is a valid path.

/// Working directory shown in the prompt on startup.
pub const DEFAULT_CWD: &str = "~/portfolio";

/// Compute the new working directory after `cd <arg>` from `prev`.
pub fn resolve(prev: &str, arg: &str) -> String {
    if arg.is_empty() || arg == "." {
        return prev.to_string();
    }
    if arg == ".." {
        return match prev.rfind('/') {
            Some(idx) if idx > 0 => prev[..idx].to_string(),
            _ => "~".to_string(),
        };
    }
    if arg.starts_with('/') || arg.starts_with('~') {
        return arg.to_string();
    }
    format!("{prev}/{arg}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_dot_keep_cwd() {
        assert_eq!(resolve("~/x", ""), "~/x");
        assert_eq!(resolve("~/x", "."), "~/x");
    }

    #[test]
    fn parent_walks_up_to_home() {
        let a = resolve("~/a/b", "..");
        assert_eq!(a, "~/a");
        let b = resolve(&a, "..");
        assert_eq!(b, "~");
        assert_eq!(resolve(&b, ".."), "~");
    }

    #[test]
    fn parent_of_root_level_is_home() {
        assert_eq!(resolve("/abs", ".."), "~");
        assert_eq!(resolve("/", ".."), "~");
        assert_eq!(resolve("/usr/lib", ".."), "/usr");
    }

    #[test]
    fn absolute_replaces() {
        assert_eq!(resolve("~/x", "/abs"), "/abs");
        assert_eq!(resolve("~/x", "~/other"), "~/other");
        assert_eq!(resolve("~/x", "~"), "~");
    }

    #[test]
    fn relative_appends() {
        assert_eq!(resolve("~/x", "y"), "~/x/y");
        assert_eq!(resolve("~/x", "y/z"), "~/x/y/z");
        assert_eq!(resolve(DEFAULT_CWD, "src"), "~/portfolio/src");
    }
}
