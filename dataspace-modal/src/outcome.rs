use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
}

/// A submit that was refused before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Closed,
    Busy,
    Invalid { message: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Closed => f.write_str("the dialog is not open"),
            SubmitError::Busy => f.write_str("a request is already in progress"),
            SubmitError::Invalid { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for SubmitError {}
