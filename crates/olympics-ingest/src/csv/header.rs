//! CSV header parsing and column lookup.

/// Header row of a source table.
#[derive(Debug, Clone, Default)]
pub struct CsvHeaders {
    /// Normalized column names in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Finds the column matching `name`, ignoring ASCII case.
    ///
    /// Returns the spelling used in the file.
    pub fn find(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Returns the required names that have no matching column.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| self.find(name).is_none())
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace and a UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Parses a CSV line into fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        let headers = CsvHeaders::new(vec!["NOC".to_string(), "region".to_string()]);
        assert_eq!(headers.find("Region"), Some("region"));
        assert_eq!(headers.find("noc"), Some("NOC"));
        assert_eq!(headers.find("notes"), None);
    }

    #[test]
    fn test_missing_columns() {
        let headers = CsvHeaders::new(vec!["Name".to_string(), "Year".to_string()]);
        assert_eq!(headers.missing(&["Name", "NOC", "Medal"]), vec!["NOC", "Medal"]);
        assert!(headers.missing(&["name"]).is_empty());
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Name  "), "Name");
        assert_eq!(normalize_header("\u{feff}ID"), "ID");
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"Name\",Sex,\"Team, Pair\"");
        assert_eq!(result, vec!["Name", "Sex", "Team, Pair"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"he said \"\"hi\"\"\",b");
        assert_eq!(result, vec!["he said \"hi\"", "b"]);
    }
}
