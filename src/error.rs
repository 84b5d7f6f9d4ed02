use std::error::Error;
use std::fmt;

// Matches the EINVAL convention of the original lab tooling.
const EXIT_INVALID: i32 = 22;
const EXIT_PARSE: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    // Wrong argument count or shape.
    Usage(String),
    // Malformed numeric field, record count mismatch, unparseable solver text.
    Parse(String),
    // Structurally fine input with an out-of-range value.
    Validation(String),
}

impl ToolError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Validation(_) => EXIT_INVALID,
            Self::Parse(_) => EXIT_PARSE,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Validation(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for ToolError {}
