use std::fmt;

/// Where an error was detected. `Syntactic` errors come from the node
/// converter rejecting a raw node; everything raised during execution
/// (binding policy, type checks, arithmetic) is `Semantic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntactic,
    Semantic,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntactic => write!(f, "Syntactic"),
            ErrorCategory::Semantic => write!(f, "Semantic"),
        }
    }
}

/// One entry in the accumulated error list. Errors are data carried in
/// the result bundle, never a reason to stop the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub category: ErrorCategory,
    pub description: String,
}

impl ErrorRecord {
    pub fn new(category: ErrorCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.description)
    }
}
