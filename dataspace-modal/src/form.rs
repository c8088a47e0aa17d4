use dataspace_api_schema::{CreateTarget, MutationRequest};

use crate::busy::BusyFlag;
use crate::notify::Notifier;
use crate::outcome::{ModalState, MutationOutcome, SubmitError};
use crate::pending::{MutationAction, PendingMutation};
use crate::transport::{MutationFailure, MutationTransport};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub error: Option<String>,
}

/// Collects a single required name and POSTs it.
#[derive(Debug, Clone)]
pub struct FormModal {
    target: CreateTarget,
    field: FormField,
    open: bool,
    busy: BusyFlag,
}

impl FormModal {
    pub fn new(target: CreateTarget, field_label: impl Into<String>) -> Self {
        Self {
            target,
            field: FormField {
                label: field_label.into(),
                ..FormField::default()
            },
            open: false,
            busy: BusyFlag::new(),
        }
    }

    pub fn target(&self) -> &CreateTarget {
        &self.target
    }

    pub fn field(&self) -> &FormField {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.field.value
    }

    pub fn field_error(&self) -> Option<&str> {
        self.field.error.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.field.value = value.into();
        self.field.error = None;
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

    /// Validates the field and, if it holds a name, marks the modal busy.
    ///
    /// An empty field records an inline error and sends nothing.
    pub fn begin(&mut self) -> Result<PendingMutation, SubmitError> {
        if !self.open {
            return Err(SubmitError::Closed);
        }
        if self.busy.is_busy() {
            return Err(SubmitError::Busy);
        }
        let name = self.field.value.trim().to_string();
        if name.is_empty() {
            let message = format!("{} is required", self.field.label);
            self.field.error = Some(message.clone());
            return Err(SubmitError::Invalid { message });
        }
        PendingMutation::start(
            &self.busy,
            MutationRequest::create(&self.target, &name),
            MutationAction::Create,
            name,
        )
    }

    /// Finishes a request from [`FormModal::begin`]; the field is cleared
    /// only when the backend accepted it.
    pub fn complete<N: Notifier + ?Sized>(
        &mut self,
        pending: PendingMutation,
        result: Result<(), MutationFailure>,
        notifier: &N,
        on_ok: impl FnOnce(),
    ) -> MutationOutcome {
        let outcome = pending.finish(result, notifier, on_ok);
        if outcome.success {
            self.clear();
        }
        outcome
    }

    pub fn submit<T, N>(
        &mut self,
        transport: &T,
        notifier: &N,
        on_ok: impl FnOnce(),
    ) -> Result<MutationOutcome, SubmitError>
    where
        T: MutationTransport + ?Sized,
        N: Notifier + ?Sized,
    {
        let pending = self.begin()?;
        let result = transport.execute(pending.request());
        Ok(self.complete(pending, result, notifier, on_ok))
    }

    pub fn cancel(&mut self, on_cancel: impl FnOnce()) {
        self.clear();
        on_cancel();
    }

    fn clear(&mut self) {
        self.field.value.clear();
        self.field.error = None;
    }
}
