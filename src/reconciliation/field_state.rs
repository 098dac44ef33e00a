#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a field is in the lifecycle of a proposal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldStatus {
    /// The proposal doesn't change the field, or there's no proposal.
    #[default]
    Unchanged,

    /// The field has changes waiting for a decision.
    Pending,

    /// Every change was decided and the field now holds the proposed value.
    Applied,

    /// Every change was decided but the field differs from the proposed value.
    Dismissed,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub current_value: String,
    pub proposed_value: Option<String>,
    pub status: FieldStatus,
}

impl FieldState {
    #[must_use]
    pub fn new(current_value: impl Into<String>) -> Self {
        Self {
            current_value: current_value.into(),
            proposed_value: None,
            status: FieldStatus::Unchanged,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool { self.status == FieldStatus::Pending }
}
