use std::fmt;

use dataspace_api_schema::MutationRequest;

/// Why a dispatched mutation did not succeed.
///
/// Both variants surface to the user as the same generic message; they are
/// kept apart so they can be logged differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationFailure {
    HttpStatus { status: u16 },
    Transport { message: String },
}

impl fmt::Display for MutationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationFailure::HttpStatus { status } => write!(f, "unexpected status {}", status),
            MutationFailure::Transport { message } => write!(f, "transport error: {}", message),
        }
    }
}

/// Sends one request and reports whether the backend answered 200.
pub trait MutationTransport {
    fn execute(&self, request: &MutationRequest) -> Result<(), MutationFailure>;
}

impl<T: MutationTransport + ?Sized> MutationTransport for &T {
    fn execute(&self, request: &MutationRequest) -> Result<(), MutationFailure> {
        (**self).execute(request)
    }
}
