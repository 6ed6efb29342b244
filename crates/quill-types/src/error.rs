use thiserror::Error;

/// Errors from loading a saved transcript into the history.
///
/// Every variant means the input was rejected wholesale -- the in-memory
/// history is left unchanged on failure.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("transcript is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("transcript root must be a JSON array")]
    NotAnArray,

    #[error("turn {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("turn {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("turn {index} field '{field}' must be a string")]
    NotAString { index: usize, field: &'static str },

    #[error("turn {index} has invalid role '{role}' (expected \"User\" or \"AI\")")]
    InvalidRole { index: usize, role: String },
}

/// Errors from rendering a prompt template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("no template named '{0}'")]
    UnknownTemplate(String),

    #[error("template '{template}' requires parameter '{parameter}'")]
    MissingParameter {
        template: String,
        parameter: &'static str,
    },
}

/// Errors from the transcript file store.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("invalid transcript name '{0}'")]
    InvalidName(String),

    #[error("no saved transcript named '{0}'")]
    NotFound(String),

    #[error("transcript io error: {0}")]
    Io(#[from] std::io::Error),
}
