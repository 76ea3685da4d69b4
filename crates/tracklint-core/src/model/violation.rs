use serde::Serialize;

/// Rule a violation was raised under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rule {
    /// Path contains characters outside the general filename class
    Filename,
    /// Source file name is not lowercase-only
    SourceFilename,
    /// Executable file without a shebang line
    MissingShebang,
    /// Executable file whose shebang is not one of the accepted interpreters
    UnexpectedShebang,
    /// Mode is neither 644 nor 755
    UnexpectedPermission,
    /// File starts with a shebang but is not executable
    ShebangNotExecutable,
}

impl Rule {
    /// Stable identifier used in logs and JSON output
    pub fn code(&self) -> &'static str {
        match self {
            Rule::Filename => "FILENAME",
            Rule::SourceFilename => "SOURCE_FILENAME",
            Rule::MissingShebang => "MISSING_SHEBANG",
            Rule::UnexpectedShebang => "UNEXPECTED_SHEBANG",
            Rule::UnexpectedPermission => "UNEXPECTED_PERMISSION",
            Rule::ShebangNotExecutable => "SHEBANG_NOT_EXECUTABLE",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One policy failure for one file
///
/// `Display` renders the operator-facing line: it names the path, the rule
/// that was broken and the command that fixes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: Rule,
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(rule: Rule, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
