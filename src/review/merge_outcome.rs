#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ChangeId, Decision, DecisionStore};
use crate::{operations::ChangeOp, utils::string_builder::StringBuilder};

/// The merged text of a field given the current decisions, and whether every
/// change has been decided.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    pub merged: String,
    pub resolved: bool,
}

/// Apply `decisions` to `original`, the text `operations` were computed
/// from. Accepted changes contribute their added text; declined and pending
/// changes keep the original text.
#[must_use]
pub fn compile_merge(
    original: &str,
    operations: &[ChangeOp],
    decisions: &DecisionStore,
) -> MergeOutcome {
    let mut builder = StringBuilder::new(original);
    let mut change_count = 0;

    for operation in operations {
        match operation {
            ChangeOp::Equal { text } => builder.retain(text.chars().count()),
            ChangeOp::Change { before, after } => {
                let decision = decisions.get(ChangeId(change_count));
                change_count += 1;

                if decision == Some(Decision::Accept) {
                    builder.delete(before.chars().count());
                    builder.insert(after);
                } else {
                    builder.retain(before.chars().count());
                }
            }
        }
    }

    debug_assert_eq!(
        change_count,
        decisions.len(),
        "There must be exactly one decision per change"
    );

    MergeOutcome {
        merged: builder.build(),
        resolved: decisions.is_resolved(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::operations::diff;

    const BEFORE: &str = "Dear Professor Smith, I am interested.";
    const AFTER: &str = "Dear Dr. Smith, I am very interested.";

    #[test]
    fn test_pending_keeps_original() {
        let operations = diff(BEFORE, AFTER);
        let decisions = DecisionStore::new(2);

        assert_eq!(
            compile_merge(BEFORE, &operations, &decisions),
            MergeOutcome {
                merged: BEFORE.to_owned(),
                resolved: false,
            }
        );
    }

    #[test]
    fn test_accept_and_decline_all() {
        let operations = diff(BEFORE, AFTER);
        let mut decisions = DecisionStore::new(2);

        decisions.set_all(Decision::Accept);
        assert_eq!(
            compile_merge(BEFORE, &operations, &decisions),
            MergeOutcome {
                merged: AFTER.to_owned(),
                resolved: true,
            }
        );

        decisions.set_all(Decision::Decline);
        assert_eq!(
            compile_merge(BEFORE, &operations, &decisions),
            MergeOutcome {
                merged: BEFORE.to_owned(),
                resolved: true,
            }
        );
    }

    #[test]
    fn test_partial_acceptance() {
        let operations = diff(BEFORE, AFTER);
        let mut decisions = DecisionStore::new(2);

        decisions.set(ChangeId(1), Decision::Accept).unwrap();
        assert_eq!(
            compile_merge(BEFORE, &operations, &decisions),
            MergeOutcome {
                merged: "Dear Professor Smith, I am very interested.".to_owned(),
                resolved: false,
            }
        );

        decisions.set(ChangeId(0), Decision::Decline).unwrap();
        assert!(compile_merge(BEFORE, &operations, &decisions).resolved);
    }

    #[test]
    fn test_no_changes_is_resolved() {
        let operations = diff("same", "same");

        assert_eq!(
            compile_merge("same", &operations, &DecisionStore::new(0)),
            MergeOutcome {
                merged: "same".to_owned(),
                resolved: true,
            }
        );
    }
}
