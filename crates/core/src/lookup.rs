//! Lookup lifecycle state machine
//!
//! Pure bookkeeping for one tool's lookups: which request is the newest, which
//! outcomes are allowed to become visible, and what the presentation layer
//! should currently show. The async controller in the shell crate owns one
//! `LookupMachine` and feeds it fetch outcomes as they arrive, in any order.
//!
//! The only ordering rule is **last-submitted-wins**: an outcome is accepted
//! only if it belongs to the most recently issued request and that request was
//! issued after the last reset.

use serde::Serialize;

use crate::error::ErrorKind;

/// Monotonically increasing sequence number assigned at submit time
pub type RequestId = u64;

/// What the presentation layer renders. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupState<T> {
    Idle,
    Pending {
        request_id: RequestId,
    },
    Succeeded {
        request_id: RequestId,
        result: T,
    },
    Failed {
        request_id: RequestId,
        reason: ErrorKind,
    },
}

impl<T> Default for LookupState<T> {
    fn default() -> Self {
        LookupState::Idle
    }
}

impl<T> LookupState<T> {
    /// True once a lookup has produced its visible outcome
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            LookupState::Succeeded { .. } | LookupState::Failed { .. }
        )
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LookupState::Pending { .. })
    }

    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            LookupState::Idle => None,
            LookupState::Pending { request_id }
            | LookupState::Succeeded { request_id, .. }
            | LookupState::Failed { request_id, .. } => Some(*request_id),
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            LookupState::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<ErrorKind> {
        match self {
            LookupState::Failed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Synchronous half of the lookup controller.
#[derive(Debug, Clone)]
pub struct LookupMachine<T> {
    state: LookupState<T>,
    last_issued: RequestId,
    ignore_below: RequestId,
}

impl<T> Default for LookupMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LookupMachine<T> {
    pub fn new() -> Self {
        Self {
            state: LookupState::Idle,
            last_issued: 0,
            ignore_below: 0,
        }
    }

    pub fn state(&self) -> &LookupState<T> {
        &self.state
    }

    pub fn last_issued(&self) -> RequestId {
        self.last_issued
    }

    /// Issue a new request id and move to `Pending`.
    pub fn begin(&mut self) -> RequestId {
        self.last_issued += 1;
        self.state = LookupState::Pending {
            request_id: self.last_issued,
        };
        self.last_issued
    }

    /// Fail a submission synchronously, without any request going out.
    ///
    /// The rejected submission still consumes an id so that anything already
    /// in flight becomes stale: the rejected submission is the last one.
    pub fn reject(&mut self, reason: ErrorKind) -> RequestId {
        self.last_issued += 1;
        self.state = LookupState::Failed {
            request_id: self.last_issued,
            reason,
        };
        self.last_issued
    }

    /// True if an outcome for `request_id` would still be accepted
    pub fn is_current(&self, request_id: RequestId) -> bool {
        request_id == self.last_issued && request_id > self.ignore_below
    }

    /// Offer the outcome of a finished request.
    ///
    /// Returns `true` if the state changed. Outcomes of superseded requests,
    /// or of requests issued before the last reset, are dropped.
    pub fn resolve(&mut self, request_id: RequestId, outcome: Result<T, ErrorKind>) -> bool {
        if !self.is_current(request_id) {
            return false;
        }

        self.state = match outcome {
            Ok(result) => LookupState::Succeeded { request_id, result },
            Err(reason) => LookupState::Failed { request_id, reason },
        };
        true
    }

    /// Go back to `Idle` and ignore every request issued so far.
    pub fn reset(&mut self) {
        self.ignore_below = self.last_issued;
        self.state = LookupState::Idle;
    }
}
