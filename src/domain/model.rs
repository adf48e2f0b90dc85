use serde::Serialize;
use std::fmt;

/// Ordered file names, one per non-blank input line.
///
/// Entries are trimmed and never empty. Order and duplicates follow the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryList {
    entries: Vec<String>,
}

impl EntryList {
    /// Trims every line and drops the blank ones.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = lines
            .into_iter()
            .map(trim_entry)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

/// Splits text on `\n`, `\r\n` and lone `\r`.
///
/// `\r\n` yields an extra empty piece, which is harmless since blank lines are dropped.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F).
pub fn trim_entry(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub entry_count: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created with {} entries.",
            self.output_path, self.entry_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let list = EntryList::from_lines(split_lines("drum.wav\n  snare.wav\n\nhat.wav\n"));
        assert_eq!(list.as_slice(), ["drum.wav", "snare.wav", "hat.wav"]);
    }

    #[test]
    fn test_tabs_and_spaces_are_trimmed() {
        assert_eq!(trim_entry("  foo.wav\t"), "foo.wav");
        assert_eq!(trim_entry("\u{a0}bar.wav\u{3000}"), "bar.wav");
        assert_eq!(trim_entry("\u{1c}\u{1f}baz.wav\u{1e}"), "baz.wav");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let list = EntryList::from_lines(split_lines("  kick drum 01.wav  "));
        assert_eq!(list.as_slice(), ["kick drum 01.wav"]);
    }

    #[test]
    fn test_whitespace_only_lines_contribute_nothing() {
        let list = EntryList::from_lines(split_lines("   \n\t\t\n \u{0b}\u{0c} \n"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let list = EntryList::from_lines(split_lines("b.wav\na.wav\nb.wav\n"));
        assert_eq!(list.into_vec(), vec!["b.wav", "a.wav", "b.wav"]);
    }

    #[test]
    fn test_line_endings_split_alike() {
        let lf = EntryList::from_lines(split_lines("a\nb\nc"));
        let crlf = EntryList::from_lines(split_lines("a\r\nb\r\nc\r\n"));
        let cr = EntryList::from_lines(split_lines("a\rb\rc"));
        assert_eq!(lf, crlf);
        assert_eq!(lf, cr);
        assert_eq!(lf.len(), 3);
    }

    #[test]
    fn test_byte_order_mark_is_not_whitespace() {
        let list = EntryList::from_lines(split_lines("\u{feff}a.wav\nb.wav"));
        assert_eq!(list.as_slice(), ["\u{feff}a.wav", "b.wav"]);
    }

    #[test]
    fn test_summary_status_line() {
        let summary = RunSummary {
            output_path: "list.json".to_string(),
            entry_count: 3,
        };
        assert_eq!(summary.to_string(), "list.json created with 3 entries.");
    }
}
