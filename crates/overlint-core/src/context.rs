//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to rules for the file being checked.
///
/// Contains metadata about the file that rules can use to make
/// context-aware decisions (e.g., relax checks in declaration files).
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Whether this file is a `.d.ts` declaration file.
    pub is_declaration: bool,
    /// Whether this file is detected as a test file.
    pub is_test: bool,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            is_declaration: Self::detect_declaration_file(path),
            is_test: Self::detect_test_file(path),
            relative_path,
        }
    }

    /// Detects if a file is a TypeScript declaration file.
    fn detect_declaration_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".d.ts"))
    }

    /// Detects if a file is a test file based on path conventions.
    fn detect_test_file(path: &Path) -> bool {
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "test" || s == "tests" || s == "__tests__" {
                    return true;
                }
            }
        }

        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with(".spec.ts")
                || file_name.ends_with(".spec.tsx")
                || file_name.ends_with(".test.ts")
                || file_name.ends_with(".test.tsx")
            {
                return true;
            }
        }

        false
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or 0 if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.lines().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1; // +1 for newline
        }

        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_declaration_file() {
        assert!(FileContext::detect_declaration_file(Path::new(
            "src/types.d.ts"
        )));
        assert!(!FileContext::detect_declaration_file(Path::new(
            "src/types.ts"
        )));
    }

    #[test]
    fn detects_test_file() {
        assert!(FileContext::detect_test_file(Path::new("src/app.spec.ts")));
        assert!(FileContext::detect_test_file(Path::new(
            "src/__tests__/app.ts"
        )));
        assert!(FileContext::detect_test_file(Path::new("test/app.ts")));
        assert!(!FileContext::detect_test_file(Path::new("src/app.ts")));
    }

    #[test]
    fn offset_calculation() {
        let content = "line1\nline2\nline3";
        let ctx = FileContext {
            path: Path::new("test.ts"),
            content,
            is_declaration: false,
            is_test: false,
            relative_path: PathBuf::from("test.ts"),
        };

        assert_eq!(ctx.offset_for(1, 1), 0); // Start of line 1
        assert_eq!(ctx.offset_for(2, 1), 6); // Start of line 2
        assert_eq!(ctx.offset_for(2, 3), 8); // "ne" in line2
    }
}
