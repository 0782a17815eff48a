//! Two-phase optimistic state updates
//!
//! The portal shows a proposed record immediately while the authoritative
//! update is in flight, then commits the proposal on success or restores the
//! prior snapshot on failure. Both phases are explicit values so each can be
//! exercised on its own.

use std::future::Future;

/// A staged update holding both the prior snapshot and the proposed record
#[derive(Debug, Clone)]
pub struct OptimisticUpdate<T: Clone> {
    prior: T,
    proposed: T,
}

impl<T: Clone> OptimisticUpdate<T> {
    /// Phase one: snapshot the current record next to the proposed one
    pub fn stage(current: &T, proposed: T) -> Self {
        Self {
            prior: current.clone(),
            proposed,
        }
    }

    /// The record to display while the update is in flight
    pub fn proposed(&self) -> &T {
        &self.proposed
    }

    /// The snapshot taken when the update was staged
    pub fn prior(&self) -> &T {
        &self.prior
    }

    /// Phase two, success path: keep the proposed record
    pub fn commit(self) -> T {
        self.proposed
    }

    /// Phase two, failure path: restore the prior snapshot
    pub fn revert(self) -> T {
        self.prior
    }

    /// Resolve against the outcome of the authoritative update
    pub fn resolve<E>(self, outcome: Result<(), E>) -> T {
        match outcome {
            Ok(()) => self.commit(),
            Err(_) => self.revert(),
        }
    }

    /// Run the full cycle: publish the proposal, then commit or revert.
    ///
    /// Failures are logged and absorbed; the caller always gets a record
    /// back, either the proposed one or the restored snapshot.
    pub async fn apply<F, Fut, E>(self, publish: F) -> T
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: std::fmt::Display,
    {
        match publish(self.proposed.clone()).await {
            Ok(()) => self.commit(),
            Err(err) => {
                tracing::warn!(error = %err, "optimistic update failed, restoring prior state");
                self.revert()
            }
        }
    }
}
