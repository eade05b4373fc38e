use crate::{ProfileError, ProfileResult};

use std::fmt;

use log::{debug, warn};
use tokio::sync::watch;

/// Long-running operation that blocks the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyOp {
    Uploading,
    Deleting,
}

impl fmt::Display for BusyOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uploading => f.write_str("uploading"),
            Self::Deleting => f.write_str("deleting"),
        }
    }
}

/// What the screen renders: a global fallback while loading, interactive
/// content otherwise, disabled while busy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
    Busy(BusyOp),
    /// Interactive again after a failed operation; holds its summary.
    Errored(String),
}

impl ViewState {
    /// Whether user-triggered operations may start.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Ready | Self::Errored(_))
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading"),
            Self::Ready => f.write_str("Ready"),
            Self::Busy(op) => write!(f, "Busy({op})"),
            Self::Errored(_) => f.write_str("Errored"),
        }
    }
}

/// Single owner of the screen's [`ViewState`].
///
/// Transitions are the only way to change the state:
///
/// ```text
/// Loading --finish_loading--> Ready
/// Ready | Errored --try_begin(op)--> Busy(op)
/// Busy(op) --guard.succeed / drop--> Ready
/// Busy(op) --guard.fail--> Errored
/// ```
///
/// At most one operation is in flight: `try_begin` rejects a second one
/// while the machine is busy.
#[derive(Debug)]
pub struct ViewStateMachine {
    tx: watch::Sender<ViewState>,
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateMachine {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::Loading);
        Self { tx }
    }

    /// Current state.
    pub fn state(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    /// Read-only feed of state changes for the rendering layer.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    /// Loading -> Ready. Fails from any other state.
    #[track_caller]
    pub fn finish_loading(&self) -> ProfileResult<()> {
        let mut from = None;

        self.tx.send_if_modified(|state| {
            if *state == ViewState::Loading {
                *state = ViewState::Ready;
                true
            } else {
                from = Some(state.to_string());
                false
            }
        });

        match from {
            None => {
                debug!("View state: Loading -> Ready");
                Ok(())
            }
            Some(from) => Err(ProfileError::invalid_transition(from, ViewState::Ready)),
        }
    }

    /// Claims the screen for `op`.
    ///
    /// The returned guard must be settled with [`BusyGuard::succeed`] or
    /// [`BusyGuard::fail`]; dropping it unsettled returns to Ready.
    #[track_caller]
    pub fn try_begin(&self, op: BusyOp) -> ProfileResult<BusyGuard<'_>> {
        let mut rejected_by = None;

        self.tx.send_if_modified(|state| {
            if state.is_interactive() {
                *state = ViewState::Busy(op);
                true
            } else {
                rejected_by = Some(state.clone());
                false
            }
        });

        match rejected_by {
            None => {
                debug!("View state: -> Busy({op})");
                Ok(BusyGuard {
                    machine: self,
                    op,
                    settled: false,
                })
            }
            Some(ViewState::Busy(current)) => Err(ProfileError::busy(current)),
            Some(other) => Err(ProfileError::invalid_transition(other, ViewState::Busy(op))),
        }
    }

    fn settle(&self, op: BusyOp, next: ViewState) {
        let settled = self.tx.send_if_modified(|state| {
            if *state == ViewState::Busy(op) {
                *state = next.clone();
                true
            } else {
                false
            }
        });

        if settled {
            debug!("View state: Busy({op}) -> {next}");
        } else {
            warn!("View state was no longer Busy({op}) when settling to {next}");
        }
    }
}

/// Exclusive claim on the screen while an operation runs.
#[derive(Debug)]
#[must_use = "dropping the guard immediately ends the operation"]
pub struct BusyGuard<'a> {
    machine: &'a ViewStateMachine,
    op: BusyOp,
    settled: bool,
}

impl BusyGuard<'_> {
    pub fn op(&self) -> BusyOp {
        self.op
    }

    /// Busy -> Ready.
    pub fn succeed(mut self) {
        self.settled = true;
        self.machine.settle(self.op, ViewState::Ready);
    }

    /// Busy -> Errored, keeping the error's summary.
    pub fn fail(mut self, error: &ProfileError) {
        self.settled = true;
        self.machine.settle(self.op, ViewState::Errored(error.summary()));
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Busy({}) guard dropped without an outcome", self.op);
            self.machine.settle(self.op, ViewState::Ready);
        }
    }
}
