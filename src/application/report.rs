//! Command output as a sequence of typed lines
//!
//! Services build a [`Report`]; the CLI layer decides how each line kind
//! looks on the terminal.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Success(String),
    Info(String),
    Warning(String),
    /// Undecorated text
    Plain(String),
}

impl Line {
    pub fn text(&self) -> &str {
        match self {
            Line::Success(s) | Line::Info(s) | Line::Warning(s) | Line::Plain(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.lines.push(Line::Success(msg.into()));
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.lines.push(Line::Info(msg.into()));
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.lines.push(Line::Warning(msg.into()));
    }

    pub fn plain(&mut self, msg: impl Into<String>) {
        self.lines.push(Line::Plain(msg.into()));
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}
