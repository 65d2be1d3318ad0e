use std::path::Path;

/// Formats a path with ~ substitution for the home directory
///
/// Used only for display in the end-of-run summary; all filesystem work uses
/// the full path.
pub fn format_path_with_tilde(path: &Path) -> String {
    format_with_home(path, dirs::home_dir().as_deref())
}

fn format_with_home(path: &Path, home: Option<&Path>) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = home {
        let home_str = home.to_string_lossy();
        if let Some(rest) = path_str.strip_prefix(home_str.as_ref()) {
            return format!("~{}", rest);
        }
    }
    path_str.into_owned()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_path_under_home() {
        let path = PathBuf::from("/Users/alice/Library/Application Support/Fire/Sessions");
        let formatted = format_with_home(&path, Some(Path::new("/Users/alice")));
        assert_eq!(formatted, "~/Library/Application Support/Fire/Sessions");
    }

    #[test]
    fn test_format_path_outside_home() {
        let path = PathBuf::from("/opt/logs");
        let formatted = format_with_home(&path, Some(Path::new("/Users/alice")));
        assert_eq!(formatted, "/opt/logs");
    }

    #[test]
    fn test_format_path_no_home() {
        let path = PathBuf::from("/opt/logs");
        assert_eq!(format_with_home(&path, None), "/opt/logs");
    }
}
