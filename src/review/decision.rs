use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ReviewError;

/// The user's verdict on a single change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decision {
    #[default]
    Pending,
    Accept,
    Decline,
}

/// Position of a change among the `Change` operations of a diff, starting
/// from 0. Equal operations don't get an id.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChangeId(pub usize);

impl ChangeId {
    #[must_use]
    pub fn index(self) -> usize { self.0 }
}

impl From<usize> for ChangeId {
    fn from(index: usize) -> Self { ChangeId(index) }
}

impl Display for ChangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "#{}", self.0) }
}

/// One decision per change of an operation list. It's created together with
/// the operation list and is never carried over to a different one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecisionStore {
    decisions: Vec<Decision>,
}

impl DecisionStore {
    /// Create a store with every decision pending.
    #[must_use]
    pub fn new(change_count: usize) -> Self {
        Self {
            decisions: vec![Decision::Pending; change_count],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.decisions.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.decisions.is_empty() }

    #[must_use]
    pub fn get(&self, change: ChangeId) -> Option<Decision> {
        self.decisions.get(change.index()).copied()
    }

    /// Record `decision` for `change` and return the previous decision.
    ///
    /// # Errors
    ///
    /// `ReviewError::UnknownChange` if `change` is out of range.
    pub fn set(&mut self, change: ChangeId, decision: Decision) -> Result<Decision, ReviewError> {
        let change_count = self.decisions.len();
        let slot = self
            .decisions
            .get_mut(change.index())
            .ok_or(ReviewError::UnknownChange {
                index: change.index(),
                change_count,
            })?;

        Ok(std::mem::replace(slot, decision))
    }

    pub fn set_all(&mut self, decision: Decision) { self.decisions.fill(decision); }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.decisions
            .iter()
            .filter(|decision| **decision == Decision::Pending)
            .count()
    }

    /// True when no decision is pending. A store without changes is resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool { self.pending_count() == 0 }

    pub fn iter(&self) -> impl Iterator<Item = (ChangeId, Decision)> + '_ {
        self.decisions
            .iter()
            .enumerate()
            .map(|(index, decision)| (ChangeId(index), *decision))
    }
}
