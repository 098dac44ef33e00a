use thiserror::Error;

/// Errors raised when a caller addresses a change or a field that doesn't
/// exist in the current review state. Diffing and merging themselves never
/// fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The change index doesn't belong to the current operation list.
    #[error("Change #{index} does not exist, there are only {change_count} changes to review")]
    UnknownChange {
        /// The requested change index
        index: usize,
        /// The number of changes in the current operation list
        change_count: usize,
    },

    #[error("Field {0} is not tracked")]
    UnknownField(String),

    #[error("Field {0} has no pending changes to review")]
    FieldNotPending(String),

    #[error("There is no proposal under review")]
    NoActiveProposal,
}
