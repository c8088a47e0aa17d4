//! Scriptable transport for exercising modals without a backend.

use std::cell::RefCell;
use std::collections::VecDeque;

use dataspace_api_schema::MutationRequest;

use crate::busy::BusyFlag;
use crate::transport::{MutationFailure, MutationTransport};

/// Records every request and answers from a queue of scripted results
/// (`Ok(())` once the queue is empty).
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<Result<(), MutationFailure>>>,
    requests: RefCell<Vec<MutationRequest>>,
    watched: RefCell<Option<BusyFlag>>,
    busy_seen: RefCell<Vec<bool>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding(self, result: Result<(), MutationFailure>) -> Self {
        self.responses.borrow_mut().push_back(result);
        self
    }

    pub fn with_status(self, status: u16) -> Self {
        if status == 200 {
            self.responding(Ok(()))
        } else {
            self.responding(Err(MutationFailure::HttpStatus { status }))
        }
    }

    /// Samples `flag` each time a request goes out.
    pub fn watch_busy(&self, flag: BusyFlag) {
        *self.watched.borrow_mut() = Some(flag);
    }

    pub fn requests(&self) -> Vec<MutationRequest> {
        self.requests.borrow().clone()
    }

    pub fn busy_seen(&self) -> Vec<bool> {
        self.busy_seen.borrow().clone()
    }
}

impl MutationTransport for RecordingTransport {
    fn execute(&self, request: &MutationRequest) -> Result<(), MutationFailure> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(flag) = self.watched.borrow().as_ref() {
            self.busy_seen.borrow_mut().push(flag.is_busy());
        }
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}
