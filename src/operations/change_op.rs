#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::trailing_whitespace::split_trailing_whitespace;

/// One entry of a diff: either text both sides agree on, or an atomic edit
/// that can be accepted or declined on its own.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeOp {
    /// Text kept as-is.
    Equal { text: String },

    /// A contiguous removed run followed by the added run replacing it.
    /// Either side may be empty but never both.
    Change { before: String, after: String },
}

impl ChangeOp {
    #[must_use]
    pub fn equal(text: impl Into<String>) -> Self { ChangeOp::Equal { text: text.into() } }

    #[must_use]
    pub fn change(before: impl Into<String>, after: impl Into<String>) -> Self {
        let (before, after) = (before.into(), after.into());
        debug_assert!(
            !before.is_empty() || !after.is_empty(),
            "A change must remove or add something"
        );

        ChangeOp::Change { before, after }
    }

    #[must_use]
    pub fn is_change(&self) -> bool { matches!(self, ChangeOp::Change { .. }) }

    /// The operation's contribution to the old text.
    #[must_use]
    pub fn before_text(&self) -> &str {
        match self {
            ChangeOp::Equal { text } => text,
            ChangeOp::Change { before, .. } => before,
        }
    }

    /// The operation's contribution to the new text.
    #[must_use]
    pub fn after_text(&self) -> &str {
        match self {
            ChangeOp::Equal { text } => text,
            ChangeOp::Change { after, .. } => after,
        }
    }

    /// Splits the added text of a change into the part that is offered for
    /// review and its trailing whitespace, which is always shown as plain
    /// text. Returns `None` for equal operations.
    #[must_use]
    pub fn split_trailing_whitespace(&self) -> Option<(&str, &str)> {
        match self {
            ChangeOp::Equal { .. } => None,
            ChangeOp::Change { after, .. } => Some(split_trailing_whitespace(after)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_projections() {
        let equal = ChangeOp::equal("kept ");
        let change = ChangeOp::change("Professor", "Dr. ");

        assert_eq!(equal.before_text(), "kept ");
        assert_eq!(equal.after_text(), "kept ");
        assert!(!equal.is_change());

        assert_eq!(change.before_text(), "Professor");
        assert_eq!(change.after_text(), "Dr. ");
        assert!(change.is_change());
    }

    #[test]
    fn test_split_trailing_whitespace() {
        assert_eq!(ChangeOp::equal("a ").split_trailing_whitespace(), None);
        assert_eq!(
            ChangeOp::change("", "very ").split_trailing_whitespace(),
            Some(("very", " "))
        );
        assert_eq!(
            ChangeOp::change("gone", "").split_trailing_whitespace(),
            Some(("", ""))
        );
    }
}
