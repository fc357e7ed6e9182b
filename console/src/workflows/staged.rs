//! Reusable staged-operation flow
//!
//! The subtract dialog, the report material picker and the ticket item
//! dialog all share the same shape: the user fills in an operation, a
//! location selector opens to pick the source tray, and the operation is
//! applied or discarded. This tagged union is the one implementation of
//! that flow.

/// A pending operation awaiting location confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedOperation<P> {
    /// Nothing pending
    Idle,
    /// Operation captured, location selector open
    AwaitingLocation(P),
    /// Location confirmed, request in flight; confirm buttons stay disabled
    Applying(P),
}

impl<P> Default for StagedOperation<P> {
    fn default() -> Self {
        StagedOperation::Idle
    }
}

impl<P> StagedOperation<P> {
    /// Capture a payload and move to `AwaitingLocation`
    ///
    /// Returns `false` (leaving the state untouched) when another operation
    /// is already pending; the dialogs never stack.
    pub fn stage(&mut self, payload: P) -> bool {
        match self {
            StagedOperation::Idle => {
                *self = StagedOperation::AwaitingLocation(payload);
                true
            }
            _ => false,
        }
    }

    /// Move from `AwaitingLocation` to `Applying` once a location was
    /// confirmed; returns the payload to apply
    pub fn start_apply(&mut self) -> Option<&P> {
        if matches!(self, StagedOperation::AwaitingLocation(_)) {
            let StagedOperation::AwaitingLocation(payload) =
                std::mem::replace(self, StagedOperation::Idle)
            else {
                unreachable!()
            };
            *self = StagedOperation::Applying(payload);
        }
        match self {
            StagedOperation::Applying(payload) => Some(payload),
            _ => None,
        }
    }

    /// Complete the applied operation, returning its payload
    pub fn finish(&mut self) -> Option<P> {
        match std::mem::replace(self, StagedOperation::Idle) {
            StagedOperation::Applying(payload) => Some(payload),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Discard whatever is pending; closing a dialog cancels implicitly
    pub fn cancel(&mut self) {
        *self = StagedOperation::Idle;
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            StagedOperation::Idle => None,
            StagedOperation::AwaitingLocation(payload) | StagedOperation::Applying(payload) => {
                Some(payload)
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, StagedOperation::Idle)
    }

    pub fn is_awaiting_location(&self) -> bool {
        matches!(self, StagedOperation::AwaitingLocation(_))
    }

    pub fn is_applying(&self) -> bool {
        matches!(self, StagedOperation::Applying(_))
    }
}
