use dataspace_api_schema::{MutationRequest, ResourceKind};

use crate::busy::BusyFlag;
use crate::notify::{Notification, Notifier};
use crate::outcome::{MutationOutcome, SubmitError};
use crate::transport::MutationFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Create,
    Delete,
}

impl MutationAction {
    fn past_tense(&self) -> &'static str {
        match self {
            MutationAction::Create => "created",
            MutationAction::Delete => "deleted",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            MutationAction::Create => "create",
            MutationAction::Delete => "delete",
        }
    }
}

/// A request that has been dispatched and holds its modal's busy flag.
///
/// The flag is released by [`PendingMutation::finish`], or on drop if the
/// result never arrives.
#[derive(Debug)]
pub struct PendingMutation {
    request: MutationRequest,
    action: MutationAction,
    subject: String,
    busy: BusyFlag,
    released: bool,
}

impl PendingMutation {
    pub(crate) fn start(
        busy: &BusyFlag,
        request: MutationRequest,
        action: MutationAction,
        subject: String,
    ) -> Result<Self, SubmitError> {
        if !busy.try_acquire() {
            return Err(SubmitError::Busy);
        }
        log::debug!(
            "dispatching {} /{}",
            request.method,
            request.resource_kind.path()
        );
        Ok(Self {
            request,
            action,
            subject,
            busy: busy.clone(),
            released: false,
        })
    }

    pub fn request(&self) -> &MutationRequest {
        &self.request
    }

    pub fn action(&self) -> MutationAction {
        self.action
    }

    pub fn success_message(&self) -> String {
        format!(
            "{} \"{}\" {} successfully",
            self.kind().display_name(),
            self.subject,
            self.action.past_tense()
        )
    }

    pub fn failure_message(&self) -> String {
        format!(
            "Failed to {} {} \"{}\". Please try again.",
            self.action.verb(),
            self.kind().display_name().to_lowercase(),
            self.subject
        )
    }

    fn kind(&self) -> ResourceKind {
        self.request.resource_kind
    }

    /// Clears busy, sends exactly one notification and, on success only,
    /// calls `on_success` once.
    pub fn finish<N: Notifier + ?Sized>(
        mut self,
        result: Result<(), MutationFailure>,
        notifier: &N,
        on_success: impl FnOnce(),
    ) -> MutationOutcome {
        self.busy.release();
        self.released = true;

        let method = self.request.method;
        let path = self.kind().path();
        match result {
            Ok(()) => {
                log::info!("{} /{} succeeded for {:?}", method, path, self.subject);
                let message = self.success_message();
                notifier.notify(Notification::success(message.clone()));
                on_success();
                MutationOutcome {
                    success: true,
                    message,
                }
            }
            Err(failure) => {
                match &failure {
                    MutationFailure::HttpStatus { status } => {
                        log::warn!("{} /{} rejected with status {}", method, path, status)
                    }
                    MutationFailure::Transport { message } => {
                        log::error!("{} /{} failed before a response: {}", method, path, message)
                    }
                }
                let message = self.failure_message();
                notifier.notify(Notification::error(message.clone()));
                MutationOutcome {
                    success: false,
                    message,
                }
            }
        }
    }
}

impl Drop for PendingMutation {
    fn drop(&mut self) {
        if !self.released {
            log::debug!(
                "{} /{} dropped before completion",
                self.request.method,
                self.request.resource_kind.path()
            );
            self.busy.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;
    use dataspace_api_schema::MutationTarget;

    fn pending(busy: &BusyFlag) -> PendingMutation {
        let target = MutationTarget::Workspace {
            user_email: "a@b.com".to_string(),
            work_space: "W1".to_string(),
        };
        PendingMutation::start(
            busy,
            MutationRequest::delete(&target),
            MutationAction::Delete,
            "W1".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_second_start_is_rejected_while_busy() {
        let busy = BusyFlag::new();
        let first = pending(&busy);
        let target = MutationTarget::Workspace {
            user_email: "a@b.com".to_string(),
            work_space: "W1".to_string(),
        };
        let second = PendingMutation::start(
            &busy,
            MutationRequest::delete(&target),
            MutationAction::Delete,
            "W1".to_string(),
        );
        assert_eq!(second.unwrap_err(), SubmitError::Busy);
        drop(first);
        assert!(!busy.is_busy());
    }

    #[test]
    fn test_messages() {
        let busy = BusyFlag::new();
        let pending = pending(&busy);
        assert_eq!(
            pending.success_message(),
            "Workspace \"W1\" deleted successfully"
        );
        assert_eq!(
            pending.failure_message(),
            "Failed to delete workspace \"W1\". Please try again."
        );
    }

    #[test]
    fn test_status_and_transport_failures_read_the_same() {
        let busy = BusyFlag::new();
        let log = NotificationLog::new();
        let status = pending(&busy).finish(
            Err(MutationFailure::HttpStatus { status: 503 }),
            &log,
            || panic!("no callback on failure"),
        );
        let transport = pending(&busy).finish(
            Err(MutationFailure::Transport {
                message: "connection refused".to_string(),
            }),
            &log,
            || panic!("no callback on failure"),
        );
        assert_eq!(status, transport);
        assert!(!status.success);
    }

    #[test]
    fn test_callback_may_start_next_mutation() {
        let busy = BusyFlag::new();
        let log = NotificationLog::new();
        let mut next = None;
        pending(&busy).finish(Ok(()), &log, || next = Some(pending(&busy)));
        assert!(busy.is_busy());
        drop(next);
        assert!(!busy.is_busy());
    }
}
