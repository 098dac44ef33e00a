#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ChangeId, Decision, DecisionStore};
use crate::operations::ChangeOp;

/// A piece of a diff ready to be displayed. Only `Removed` and `Added`
/// fragments are interactive; they carry the change they belong to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Plain {
        text: String,
    },

    Removed {
        change: ChangeId,
        decision: Decision,
        text: String,
    },

    Added {
        change: ChangeId,
        decision: Decision,
        text: String,
    },
}

/// Turn operations into display fragments. The trailing whitespace of a
/// change's added text is emitted as a plain fragment so accepting a change
/// can't be mistaken for altering the spacing next to it.
#[must_use]
pub fn render_fragments(operations: &[ChangeOp], decisions: &DecisionStore) -> Vec<Fragment> {
    let mut result = Vec::with_capacity(operations.len());
    let mut change_index = 0;

    for operation in operations {
        match operation {
            ChangeOp::Equal { text } => push_plain(&mut result, text),
            ChangeOp::Change { before, .. } => {
                let change = ChangeId(change_index);
                let decision = decisions.get(change).unwrap_or_default();
                change_index += 1;

                if !before.is_empty() {
                    result.push(Fragment::Removed {
                        change,
                        decision,
                        text: before.clone(),
                    });
                }

                let (added, trailing_whitespace) =
                    operation.split_trailing_whitespace().unwrap_or_default();
                if !added.is_empty() {
                    result.push(Fragment::Added {
                        change,
                        decision,
                        text: added.to_owned(),
                    });
                }

                push_plain(&mut result, trailing_whitespace);
            }
        }
    }

    result
}

fn push_plain(fragments: &mut Vec<Fragment>, text: &str) {
    if text.is_empty() {
        return;
    }

    if let Some(Fragment::Plain { text: previous }) = fragments.last_mut() {
        previous.push_str(text);
    } else {
        fragments.push(Fragment::Plain {
            text: text.to_owned(),
        });
    }
}

/// Render fragments in `git diff --word-diff` notation: `[-removed-]` and
/// `{+added+}`. Decided changes are marked with `✓` (accepted) or `✗`
/// (declined) after the change's last fragment.
#[must_use]
pub fn render_word_diff(fragments: &[Fragment]) -> String {
    let mut result = String::new();

    for (i, fragment) in fragments.iter().enumerate() {
        let (change, decision) = match fragment {
            Fragment::Plain { text } => {
                result.push_str(text);
                continue;
            }
            Fragment::Removed {
                change,
                decision,
                text,
            } => {
                result.push_str(&format!("[-{text}-]"));
                (change, decision)
            }
            Fragment::Added {
                change,
                decision,
                text,
            } => {
                result.push_str(&format!("{{+{text}+}}"));
                (change, decision)
            }
        };

        let continues_change = matches!(
            fragments.get(i + 1),
            Some(Fragment::Added { change: next, .. }) if next == change
        );
        if !continues_change {
            match decision {
                Decision::Pending => {}
                Decision::Accept => result.push('✓'),
                Decision::Decline => result.push('✗'),
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::operations::diff;

    #[test]
    fn test_trailing_whitespace_is_plain() {
        let operations = diff("I am interested.", "I am very interested.");
        let fragments = render_fragments(&operations, &DecisionStore::new(1));

        assert_eq!(
            fragments,
            vec![
                Fragment::Plain {
                    text: "I am ".to_owned()
                },
                Fragment::Added {
                    change: ChangeId(0),
                    decision: Decision::Pending,
                    text: "very".to_owned()
                },
                Fragment::Plain {
                    text: " interested.".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_render_word_diff() {
        let before = "Dear Professor Smith, I am interested.";
        let after = "Dear Dr. Smith, I am very interested.";
        let operations = diff(before, after);
        let mut decisions = DecisionStore::new(2);

        assert_snapshot!(
            render_word_diff(&render_fragments(&operations, &decisions)),
            @"Dear [-Professor-]{+Dr.+} Smith, I am {+very+} interested."
        );

        decisions.set(ChangeId(0), Decision::Accept).unwrap();
        decisions.set(ChangeId(1), Decision::Decline).unwrap();

        assert_snapshot!(
            render_word_diff(&render_fragments(&operations, &decisions)),
            @"Dear [-Professor-]{+Dr.+}✓ Smith, I am {+very+}✗ interested."
        );
    }

    #[test]
    fn test_render_removal_only() {
        let operations = diff("To: a@x.com, b@x.com", "To: a@x.com,");
        let fragments = render_fragments(&operations, &DecisionStore::new(1));

        assert_snapshot!(render_word_diff(&fragments), @"To: a@x.com,[- b@x.com-]");
    }
}
