use std::fmt;

/// Generic line written for every rejected record or item
pub const ERROR_MESSAGE: &str = "Invalid data!";

/// Line-oriented outcome of one import call
///
/// Lines are kept in input order. Field level detail never appears here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    lines: Vec<String>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the generic failure line
    pub fn record_failure(&mut self) {
        self.lines.push(ERROR_MESSAGE.to_string());
    }

    pub fn record_coach_imported(&mut self, name: &str, footballers: usize) {
        self.lines.push(format!(
            "Successfully imported coach - {} with {} footballers.",
            name, footballers
        ));
    }

    pub fn record_team_imported(&mut self, name: &str, footballers: usize) {
        self.lines.push(format!(
            "Successfully imported team - {} with {} footballers.",
            name, footballers
        ));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of failure lines recorded so far
    pub fn failures(&self) -> usize {
        self.lines.iter().filter(|l| *l == ERROR_MESSAGE).count()
    }

    /// Joins the lines with `\n` and trims trailing whitespace
    pub fn into_text(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lines.join("\n").trim_end())
    }
}
