//! Line-oriented GitHub-flavoured Markdown builder.

use crate::helpers::{CodeOptions, TableOptions};

/// Accumulates markdown output line by line.
#[derive(Debug, Default, Clone)]
pub struct MarkdownBuilder {
    output: Vec<String>,
}

impl MarkdownBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// ATX heading. Levels are clamped to `1..=6`.
    pub fn header(mut self, text: &str, level: usize) -> Self {
        let level = level.clamp(1, 6);
        self.output.push(format!("{} {}", "#".repeat(level), text.trim()));
        self
    }

    pub fn empty_line(mut self) -> Self {
        self.output.push(String::new());
        self
    }

    /// Appends lines verbatim.
    pub fn text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Fenced code block, followed by an empty line.
    pub fn code<I, S>(mut self, lines: I, options: CodeOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output.push(format!("```{}", options.lang));
        self.output.extend(lines.into_iter().map(Into::into));
        self.output.push("```".to_string());
        self.output.push(String::new());
        self
    }

    /// Bulleted list, followed by an empty line. Nothing is written for an empty list.
    pub fn unordered_list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = self.output.len();
        for item in items {
            self.output.push(format!("- {}", item.as_ref()));
        }
        if self.output.len() > start {
            self.output.push(String::new());
        }
        self
    }

    pub fn blockquote(mut self, text: &str) -> Self {
        for line in text.lines() {
            self.output.push(format!("> {line}"));
        }
        self
    }

    /// Pipe table, followed by an empty line.
    pub fn table(mut self, headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> Self {
        let mut rows: Vec<&Vec<String>> = rows.iter().collect();
        if options.remove_row_if_empty {
            rows.retain(|row| row.iter().any(|cell| !cell.trim().is_empty()));
        }

        let columns: Vec<usize> = (0..headers.len())
            .filter(|&column| {
                !options.remove_column_if_empty
                    || rows.iter().any(|row| {
                        row.get(column)
                            .is_some_and(|cell| !cell.trim().is_empty())
                    })
            })
            .collect();

        if columns.is_empty() || rows.is_empty() {
            return self;
        }

        let header_line: Vec<&str> = columns.iter().map(|&column| headers[column]).collect();
        self.output.push(format!("| {} |", header_line.join(" | ")));
        self.output
            .push(format!("|{}|", vec![" --- "; columns.len()].join("|")));
        for row in rows {
            let cells: Vec<String> = columns
                .iter()
                .map(|&column| escape_cell(row.get(column).map(String::as_str).unwrap_or("")))
                .collect();
            self.output.push(format!("| {} |", cells.join(" | ")));
        }
        self.output.push(String::new());
        self
    }

    pub fn get_output(self) -> Vec<String> {
        self.output
    }
}

pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

pub fn italic(text: &str) -> String {
    format!("_{text}_")
}

pub fn inline_code(text: &str) -> String {
    format!("`{text}`")
}

pub fn link(text: &str, target: &str) -> String {
    format!("[{text}]({target})")
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{DEFAULT_CODE_OPTIONS, DEFAULT_TABLE_OPTIONS};

    #[test]
    fn test_header_and_code() {
        let output = MarkdownBuilder::new()
            .header("Foo", 3)
            .empty_line()
            .code(["class Foo"], DEFAULT_CODE_OPTIONS)
            .get_output();

        assert_eq!(
            output,
            vec!["### Foo", "", "```typescript", "class Foo", "```", ""]
        );
    }

    #[test]
    fn test_table_drops_empty_columns_and_rows() {
        let rows = vec![
            vec!["a".to_string(), String::new(), "string".to_string()],
            vec![String::new(), String::new(), String::new()],
        ];
        let output = MarkdownBuilder::new()
            .table(&["Name", "Constraint", "Type"], &rows, DEFAULT_TABLE_OPTIONS)
            .get_output();

        assert_eq!(
            output,
            vec!["| Name | Type |", "| --- | --- |", "| a | string |", ""]
        );
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let output = MarkdownBuilder::new()
            .unordered_list(Vec::<String>::new())
            .get_output();
        assert!(output.is_empty());
    }

    #[test]
    fn test_table_escapes_pipes() {
        let rows = vec![vec!["value".to_string(), "string | number".to_string()]];
        let output = MarkdownBuilder::new()
            .table(&["Name", "Type"], &rows, DEFAULT_TABLE_OPTIONS)
            .get_output();
        assert_eq!(output[2], "| value | string \\| number |");
    }
}
