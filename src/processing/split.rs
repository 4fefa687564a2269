/*! Record splitting

Records are groups of lines separated by an empty line.

A record is only emitted when a delimiter closes it:
the number of records is the number of empty lines,
and lines after the last delimiter are dropped.
Two consecutive empty lines produce an empty record.
!*/
use std::ops::Range;

use log::warn;

/// Iterates over the line ranges of records.
///
/// Ranges index into the line slice given to [RecordSplitter::new].
#[derive(Debug)]
pub struct RecordSplitter<'a> {
    lines: &'a [String],
    start: usize,
}

impl<'a> RecordSplitter<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, start: 0 }
    }

    /// Number of lines after the last delimiter that won't be part of any record.
    pub fn trailing(&self) -> usize {
        match delimiters(self.lines).last() {
            Some(last) => self.lines.len() - last - 1,
            None => self.lines.len(),
        }
    }
}

impl<'a> Iterator for RecordSplitter<'a> {
    type Item = (Range<usize>, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines;
        let offset = lines[self.start..].iter().position(|l| l.is_empty())?;
        let span = self.start..self.start + offset;
        self.start = span.end + 1;
        Some((span.clone(), &lines[span]))
    }
}

/// Indices of the delimiter (empty) lines.
pub fn delimiters(lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, l)| if l.is_empty() { Some(idx) } else { None })
        .collect()
}

/// Get the line ranges of every delimited record.
///
/// Warns when non-empty lines are left after the last delimiter.
pub fn split_records(lines: &[String]) -> Vec<Range<usize>> {
    let splitter = RecordSplitter::new(lines);
    let trailing = splitter.trailing();
    if trailing > 0 {
        warn!(
            "{} line(s) after the last empty line are not part of any record and are dropped",
            trailing
        );
    }
    splitter.map(|(span, _)| span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.split('\n').map(String::from).collect()
    }

    #[test]
    fn test_split() {
        let l = lines("aaa\nbbb\nccc\n\nrecord 2\nend of record 2\n\n");
        let records: Vec<_> = RecordSplitter::new(&l).collect();

        // last "" after the final \n is an extra, empty delimited record
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].0, 0..3);
        assert_eq!(records[0].1, &l[0..3]);
        assert_eq!(records[1].0, 4..6);
        assert_eq!(records[1].1, ["record 2", "end of record 2"]);
        assert_eq!(records[2].0, 7..7);
        assert!(records[2].1.is_empty());
    }

    #[test]
    fn count_is_delimiter_count() {
        let l = lines("a\n\nb\nc\n\n\nd\n\ne");
        assert_eq!(delimiters(&l), vec![1, 4, 5, 7]);
        assert_eq!(split_records(&l).len(), 4);
    }

    #[test]
    fn trailing_dropped() {
        let l = lines("a\n\nbye!\nrecord 3");
        let splitter = RecordSplitter::new(&l);
        assert_eq!(splitter.trailing(), 2);
        assert_eq!(split_records(&l), vec![0..1]);
    }

    #[test]
    fn no_delimiter() {
        let l = lines("aaa\nbbb\nccc");
        let splitter = RecordSplitter::new(&l);
        assert_eq!(splitter.trailing(), 3);
        assert!(split_records(&l).is_empty());
    }

    #[test]
    fn leading_delimiter() {
        let l = lines("\na\n");
        assert_eq!(split_records(&l), vec![0..0, 1..2]);
    }

    #[test]
    fn empty_input() {
        let l: Vec<String> = Vec::new();
        assert!(split_records(&l).is_empty());
        assert_eq!(RecordSplitter::new(&l).trailing(), 0);
    }
}
