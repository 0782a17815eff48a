//! Enforced status lifecycles
//!
//! Status fields are finite-state labels with a fixed transition table per
//! domain. Every transition is validated; an illegal one fails with a typed
//! error instead of silently relabeling the record.

use thiserror::Error;

/// An attempted status transition the lifecycle table does not permit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal status transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

/// Trait for status enumerations with an enforced transition table
pub trait Lifecycle: Copy + PartialEq + Sized {
    /// Stable lowercase label for this status, as rendered on the wire
    fn label(self) -> &'static str;

    /// Whether this status permits no further transitions
    fn is_terminal(self) -> bool;

    /// Whether the table permits moving from `self` to `next`
    fn can_transition(self, next: Self) -> bool;

    /// Validate a transition, returning the new status or a typed error
    fn transition(self, next: Self) -> Result<Self, TransitionError> {
        if self.can_transition(next) {
            Ok(next)
        } else {
            Err(TransitionError {
                from: self.label(),
                to: next.label(),
            })
        }
    }
}
