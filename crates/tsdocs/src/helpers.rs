//! Stateless rendering helpers and shared constants.

use tracing::Level;

use crate::model::Location;

/// Extension of generated documentation files.
pub const MARKDOWN_EXT: &str = ".md";

const TAB_STRING: &str = "    ";

/// JSDoc tags with special meaning for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsDocTag {
    Private,
    Beta,
    Deprecated,
    Internal,
    Summary,
    Example,
}

impl JsDocTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Beta => "beta",
            Self::Deprecated => "deprecated",
            Self::Internal => "internal",
            Self::Summary => "summary",
            Self::Example => "example",
        }
    }
}

/// Options for fenced code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeOptions {
    pub lang: &'static str,
}

pub const DEFAULT_CODE_OPTIONS: CodeOptions = CodeOptions { lang: "typescript" };
pub const HTML_CODE_OPTIONS: CodeOptions = CodeOptions { lang: "html" };

/// Options for markdown tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub remove_column_if_empty: bool,
    pub remove_row_if_empty: bool,
}

pub const DEFAULT_TABLE_OPTIONS: TableOptions = TableOptions {
    remove_column_if_empty: true,
    remove_row_if_empty: true,
};

/// Indentation for the given nesting level.
pub fn tab(size: usize) -> String {
    TAB_STRING.repeat(size)
}

/// Trims the sentence and appends `punctuation_mark` unless it already ends
/// with punctuation.
pub fn ensure_full_stop(sentence: &str, punctuation_mark: &str) -> String {
    const PUNCTUATION_MARKS: &[char] = &['.', '!', ':', ';', ',', '-'];

    let trimmed = sentence.trim();
    match trimmed.chars().last() {
        Some(last) if PUNCTUATION_MARKS.contains(&last) => trimmed.to_string(),
        _ => format!("{trimmed}{punctuation_mark}"),
    }
}

/// Converts platform separators to forward slashes.
pub fn standardize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// GitHub-style anchor for a heading.
pub fn heading_anchor(heading: &str) -> String {
    let mut anchor = String::with_capacity(heading.len());
    for c in heading.trim().chars() {
        if c.is_alphanumeric() || c == '_' || c == '-' {
            anchor.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            anchor.push('-');
        }
    }
    anchor
}

/// `"<file>(<line + 1>,<character>)"` prefix used for every diagnostic.
pub fn location_prefix(location: &Location) -> String {
    format!(
        "{}({},{})",
        location.file_name,
        location.line + 1,
        location.character
    )
}

/// Emits a diagnostic prefixed with the record's source position.
pub fn log_with_location(level: Level, location: &Location, message: &str) {
    let line = format!("{}: {}", location_prefix(location), message);
    match level {
        Level::ERROR => tracing::error!("{line}"),
        Level::WARN => tracing::warn!("{line}"),
        Level::INFO => tracing::info!("{line}"),
        Level::DEBUG => tracing::debug!("{line}"),
        Level::TRACE => tracing::trace!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab() {
        assert_eq!(tab(0), "");
        assert_eq!(tab(1), "    ");
        assert_eq!(tab(2), "        ");
    }

    #[test]
    fn test_ensure_full_stop() {
        assert_eq!(ensure_full_stop("Hello world", "."), "Hello world.");
        assert_eq!(ensure_full_stop("  Done!  ", "."), "Done!");
        assert_eq!(ensure_full_stop("List:", "."), "List:");
        assert_eq!(ensure_full_stop("Question", "?"), "Question?");
        assert_eq!(ensure_full_stop("", "."), ".");
    }

    #[test]
    fn test_heading_anchor() {
        assert_eq!(heading_anchor("MyClass"), "myclass");
        assert_eq!(heading_anchor("get value"), "get-value");
        assert_eq!(heading_anchor("constructor(a, b)"), "constructora-b");
    }

    #[test]
    fn test_location_prefix_is_one_based_line() {
        let location = Location::new("src/index.ts", 9, 4);
        assert_eq!(location_prefix(&location), "src/index.ts(10,4)");
    }
}
