/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Category header; the name is trimmed and may be empty.
    Category(&'a str),
    Task(&'a str),
}

/// A classified line with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub number: usize,
    pub kind: LineKind<'a>,
}

pub fn classify_line<'a>(line: &'a str, marker: &str) -> LineKind<'a> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    match strip_marker(line, marker) {
        Some(rest) => LineKind::Category(rest.trim()),
        None => LineKind::Task(line),
    }
}

/// Classify every line of `text`, dropping blank ones.
pub fn parse_lines<'a>(text: &'a str, marker: &'a str) -> impl Iterator<Item = ParsedLine<'a>> + 'a {
    text.split('\n')
        .enumerate()
        .filter_map(move |(idx, line)| match classify_line(line, marker) {
            LineKind::Blank => None,
            kind => Some(ParsedLine {
                number: idx + 1,
                kind,
            }),
        })
}

/// Case-insensitive prefix match on the marker only; returns the remainder.
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let mut rest = line.char_indices();
    for expected in marker.chars() {
        let (_, actual) = rest.next()?;
        if !expected.to_uppercase().eq(actual.to_uppercase()) {
            return None;
        }
    }
    let offset = rest.next().map(|(i, _)| i).unwrap_or(line.len());
    Some(&line[offset..])
}
