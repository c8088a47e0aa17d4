//! Confirmation and form modals that wrap a single mutating API call.
//!
//! A modal never owns whether it is shown: the parent view flips `open`.
//! The modal owns a busy flag that is set while exactly one request is in
//! flight, reports the result through a [`Notifier`], and calls back into the
//! parent on success so it can close the modal and refresh its listing.

pub mod busy;
pub mod confirmation;
pub mod form;
pub mod notify;
pub mod outcome;
pub mod pending;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;

pub use busy::BusyFlag;
pub use confirmation::ConfirmationModal;
pub use form::{FormField, FormModal};
pub use notify::{Notification, NotificationLevel, NotificationLog, Notifier};
pub use outcome::{ModalState, MutationOutcome, SubmitError};
pub use pending::{MutationAction, PendingMutation};
pub use transport::{MutationFailure, MutationTransport};
