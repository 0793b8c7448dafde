/// What a single input line was recognised as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#` through `#######` followed by whitespace.
    Heading { level: u8, content: String },
    /// `-`, `*` or `+` followed by whitespace.
    Bullet { marker: char, content: String },
    /// Anything else, including blank lines.
    Other,
}

/// A classified line of the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The line exactly as it appeared in the input, without its terminator.
    pub raw: String,
    /// Leading spaces (tabs expanded to four) divided by the indent width.
    pub indent: usize,
    pub kind: LineKind,
}

impl Line {
    pub fn is_heading(&self) -> bool {
        matches!(self.kind, LineKind::Heading { .. })
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, LineKind::Bullet { .. })
    }
}
