use dataspace_api_schema::{MutationRequest, MutationTarget};

use crate::busy::BusyFlag;
use crate::notify::Notifier;
use crate::outcome::{ModalState, MutationOutcome, SubmitError};
use crate::pending::{MutationAction, PendingMutation};
use crate::transport::MutationTransport;

/// Asks the user to confirm deleting one object, then sends the DELETE.
#[derive(Debug, Clone)]
pub struct ConfirmationModal {
    target: MutationTarget,
    subject_label: String,
    open: bool,
    busy: BusyFlag,
}

impl ConfirmationModal {
    pub fn new(target: MutationTarget, subject_label: impl Into<String>) -> Self {
        Self {
            target,
            subject_label: subject_label.into(),
            open: false,
            busy: BusyFlag::new(),
        }
    }

    /// Uses `<kind> "<name>"` as the subject label.
    pub fn for_target(target: MutationTarget) -> Self {
        let label = format!(
            "{} \"{}\"",
            target.resource_kind().display_name().to_lowercase(),
            target.subject()
        );
        Self::new(target, label)
    }

    pub fn target(&self) -> &MutationTarget {
        &self.target
    }

    pub fn subject_label(&self) -> &str {
        &self.subject_label
    }

    pub fn prompt(&self) -> String {
        Self::prompt_for(&self.subject_label)
    }

    pub fn prompt_for(subject_label: &str) -> String {
        format!(
            "Are you sure you want to delete {}? This action cannot be undone.",
            subject_label
        )
    }

    /// Points the modal at `target` if it was built for another object.
    /// Returns whether anything changed. The busy flag is kept, so a request
    /// still in flight for the old target keeps blocking submits.
    pub fn sync_target(&mut self, target: &MutationTarget, subject_label: &str) -> bool {
        if &self.target == target && self.subject_label == subject_label {
            return false;
        }
        self.target = target.clone();
        self.subject_label = subject_label.to_string();
        true
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn state(&self) -> ModalState {
        ModalState {
            open: self.open,
            busy: self.busy.is_busy(),
        }
    }

    /// Marks the modal busy and hands back the request to send.
    pub fn begin(&self) -> Result<PendingMutation, SubmitError> {
        if !self.open {
            return Err(SubmitError::Closed);
        }
        PendingMutation::start(
            &self.busy,
            MutationRequest::delete(&self.target),
            MutationAction::Delete,
            self.target.subject().to_string(),
        )
    }

    pub fn confirm<T, N>(
        &self,
        transport: &T,
        notifier: &N,
        on_success: impl FnOnce(),
    ) -> Result<MutationOutcome, SubmitError>
    where
        T: MutationTransport + ?Sized,
        N: Notifier + ?Sized,
    {
        let pending = self.begin()?;
        let result = transport.execute(pending.request());
        Ok(pending.finish(result, notifier, on_success))
    }

    pub fn cancel(&self, on_cancel: impl FnOnce()) {
        on_cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dataspace_api_schema::{HttpMethod, ResourceKind};

    use super::*;
    use crate::notify::{NotificationLevel, NotificationLog};
    use crate::testing::RecordingTransport;
    use crate::transport::MutationFailure;

    fn targets() -> Vec<MutationTarget> {
        let user_email = "a@b.com".to_string();
        let work_space = "W1".to_string();
        vec![
            MutationTarget::Workspace {
                user_email: user_email.clone(),
                work_space: work_space.clone(),
            },
            MutationTarget::Folder {
                user_email: user_email.clone(),
                work_space: work_space.clone(),
                folder_name: "F1".to_string(),
            },
            MutationTarget::File {
                user_email: user_email.clone(),
                work_space: work_space.clone(),
                folder_name: "F1".to_string(),
                file_name: "data.csv".to_string(),
            },
            MutationTarget::CleanedFolder {
                user_email: user_email.clone(),
                work_space: work_space.clone(),
                folder_name: "F1".to_string(),
            },
            MutationTarget::CleanedWorkspace {
                user_email,
                work_space,
            },
        ]
    }

    fn open_modal(target: MutationTarget) -> ConfirmationModal {
        let mut modal = ConfirmationModal::for_target(target);
        modal.set_open(true);
        modal
    }

    #[test]
    fn test_new_modal_is_closed_and_idle() {
        let modal = ConfirmationModal::for_target(targets().remove(0));
        assert_eq!(
            modal.state(),
            ModalState {
                open: false,
                busy: false
            }
        );
    }

    #[test]
    fn test_success_notifies_and_calls_back_once_for_every_kind() {
        for target in targets() {
            let modal = open_modal(target.clone());
            let transport = RecordingTransport::new().with_status(200);
            let log = NotificationLog::new();
            let calls = Cell::new(0);

            let outcome = modal
                .confirm(&transport, &log, || calls.set(calls.get() + 1))
                .unwrap();

            assert!(outcome.success);
            assert_eq!(calls.get(), 1);
            assert_eq!(log.count(NotificationLevel::Success), 1);
            assert_eq!(log.count(NotificationLevel::Error), 0);
            let requests = transport.requests();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method, HttpMethod::Delete);
            assert_eq!(requests[0].resource_kind, target.resource_kind());
            assert!(modal.is_open());
        }
    }

    #[test]
    fn test_failure_notifies_once_and_skips_callback_for_every_kind() {
        let failures = [
            Err(MutationFailure::HttpStatus { status: 500 }),
            Err(MutationFailure::HttpStatus { status: 404 }),
            Err(MutationFailure::Transport {
                message: "dns lookup failed".to_string(),
            }),
        ];
        for target in targets() {
            for failure in failures.iter().cloned() {
                let modal = open_modal(target.clone());
                let transport = RecordingTransport::new().responding(failure);
                let log = NotificationLog::new();
                let calls = Cell::new(0);

                let outcome = modal
                    .confirm(&transport, &log, || calls.set(calls.get() + 1))
                    .unwrap();

                assert!(!outcome.success);
                assert_eq!(calls.get(), 0);
                assert_eq!(log.count(NotificationLevel::Error), 1);
                assert_eq!(log.count(NotificationLevel::Success), 0);
                assert_eq!(
                    modal.state(),
                    ModalState {
                        open: true,
                        busy: false
                    }
                );
            }
        }
    }

    #[test]
    fn test_busy_only_while_request_is_outstanding() {
        let modal = open_modal(targets().remove(1));
        let transport = RecordingTransport::new().with_status(500);
        transport.watch_busy(modal.busy_flag());
        let log = NotificationLog::new();

        assert!(!modal.is_busy());
        modal.confirm(&transport, &log, || {}).unwrap();
        assert_eq!(transport.busy_seen(), vec![true]);
        assert!(!modal.is_busy());

        let busy_in_callback = Cell::new(true);
        let transport = RecordingTransport::new();
        transport.watch_busy(modal.busy_flag());
        modal
            .confirm(&transport, &log, || busy_in_callback.set(modal.is_busy()))
            .unwrap();
        assert_eq!(transport.busy_seen(), vec![true]);
        assert!(!busy_in_callback.get());
    }

    #[test]
    fn test_double_submit_is_rejected_without_a_request() {
        let modal = open_modal(targets().remove(0));
        let pending = modal.begin().unwrap();
        let transport = RecordingTransport::new();
        let log = NotificationLog::new();

        let second = modal.confirm(&transport, &log, || {});

        assert_eq!(second, Err(SubmitError::Busy));
        assert!(transport.requests().is_empty());
        assert!(log.notifications().is_empty());
        pending.finish(Ok(()), &log, || {});
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_closed_modal_sends_nothing() {
        let modal = ConfirmationModal::for_target(targets().remove(0));
        let transport = RecordingTransport::new();
        let log = NotificationLog::new();
        assert_eq!(
            modal.confirm(&transport, &log, || {}),
            Err(SubmitError::Closed)
        );
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_cancel_never_sends() {
        let modal = open_modal(targets().remove(2));
        let cancelled = Cell::new(false);
        let pending = modal.begin().unwrap();
        modal.cancel(|| cancelled.set(true));
        assert!(cancelled.get());
        drop(pending);

        modal.cancel(|| {});
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_delete_folder_scenario() {
        let modal = open_modal(MutationTarget::Folder {
            user_email: "a@b.com".to_string(),
            work_space: "W1".to_string(),
            folder_name: "F1".to_string(),
        });
        let transport = RecordingTransport::new().with_status(200);
        let log = NotificationLog::new();
        let on_delete_success = Cell::new(0);

        modal
            .confirm(&transport, &log, || {
                on_delete_success.set(on_delete_success.get() + 1)
            })
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].resource_kind, ResourceKind::Folder);
        assert_eq!(
            requests[0].identifiers,
            vec![
                ("userEmail", "a@b.com".to_string()),
                ("workSpace", "W1".to_string()),
                ("folderName", "F1".to_string()),
            ]
        );
        insta::assert_debug_snapshot!(log.notifications(), @r###"
        [
            Notification {
                level: Success,
                message: "Folder \"F1\" deleted successfully",
            },
        ]
        "###);
        assert_eq!(on_delete_success.get(), 1);
    }

    #[test]
    fn test_delete_folder_scenario_server_error() {
        let modal = open_modal(MutationTarget::Folder {
            user_email: "a@b.com".to_string(),
            work_space: "W1".to_string(),
            folder_name: "F1".to_string(),
        });
        let transport = RecordingTransport::new().with_status(500);
        let log = NotificationLog::new();
        let on_delete_success = Cell::new(0);

        modal
            .confirm(&transport, &log, || {
                on_delete_success.set(on_delete_success.get() + 1)
            })
            .unwrap();

        insta::assert_debug_snapshot!(log.notifications(), @r###"
        [
            Notification {
                level: Error,
                message: "Failed to delete folder \"F1\". Please try again.",
            },
        ]
        "###);
        assert_eq!(on_delete_success.get(), 0);
        assert!(modal.is_open());
    }

    #[test]
    fn test_prompt_uses_subject_label() {
        let modal = ConfirmationModal::new(targets().remove(0), "the Sales workspace");
        assert_eq!(
            modal.prompt(),
            "Are you sure you want to delete the Sales workspace? This action cannot be undone."
        );
    }

    #[test]
    fn test_sync_target_switches_the_deleted_object() {
        let mut targets = targets();
        let file = targets.remove(2);
        let folder = targets.remove(1);
        let mut modal = open_modal(folder.clone());
        let file_label = ConfirmationModal::for_target(file.clone())
            .subject_label()
            .to_string();

        assert!(modal.sync_target(&file, &file_label));
        assert_eq!(modal.target(), &file);
        assert_eq!(
            modal.prompt(),
            "Are you sure you want to delete file \"data.csv\"? This action cannot be undone."
        );

        let transport = RecordingTransport::new().with_status(200);
        let log = NotificationLog::new();
        modal.confirm(&transport, &log, || {}).unwrap();
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], MutationRequest::delete(&file));
        assert_eq!(
            log.notifications()[0].message,
            "File \"data.csv\" deleted successfully"
        );
    }

    #[test]
    fn test_sync_target_same_target_is_a_no_op() {
        let folder = targets().remove(1);
        let mut modal = open_modal(folder.clone());
        let label = modal.subject_label().to_string();
        assert!(!modal.sync_target(&folder, &label));
        assert!(modal.sync_target(&folder, "the F1 folder"));
        assert_eq!(modal.prompt(), ConfirmationModal::prompt_for("the F1 folder"));
    }

    #[test]
    fn test_sync_target_keeps_in_flight_request_blocking() {
        let mut targets = targets();
        let file = targets.remove(2);
        let mut modal = open_modal(targets.remove(1));
        let pending = modal.begin().unwrap();
        modal.sync_target(&file, "file");
        assert!(matches!(modal.begin(), Err(SubmitError::Busy)));
        drop(pending);
        assert!(modal.begin().is_ok());
    }
}
