//! Property-based tests for the diff and merge laws.
//!
//! ## Properties Verified
//!
//! - Accepting every change yields the proposed text
//! - Declining (or not deciding) every change yields the current text
//! - Diffing a text against itself offers no changes
//! - Projecting the operations onto either side reconstructs that side
//! - Diffing is deterministic
//! - Aligned segments never repeat a kind and cover both token sequences

use proptest::prelude::*;
use redline_text::{
    ChangeId, ChangeOp, Decision, DecisionStore, FieldReview, Segment, SegmentKind, Token, align,
    change_count, compile_merge, diff, word_tokenizer,
};

/// Short texts over a tiny vocabulary so that the two sides share tokens.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("a"),
            Just("b"),
            Just("cd"),
            Just("é"),
            Just(" "),
            Just("  "),
            Just("\n"),
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_accept_all_yields_after(before in arb_text(), after in arb_text()) {
        let mut review = FieldReview::new(before, after.clone());

        prop_assert_eq!(&review.accept_all().merged, &after);
        prop_assert!(review.is_resolved());
    }

    #[test]
    fn prop_decline_or_pending_yields_before(before in arb_text(), after in arb_text()) {
        let mut review = FieldReview::new(before.clone(), after);

        prop_assert_eq!(review.merged_text(), before.as_str());
        prop_assert_eq!(&review.decline_all().merged, &before);
    }

    #[test]
    fn prop_identical_texts_have_no_changes(text in arb_text()) {
        let operations = diff(&text, &text);

        prop_assert_eq!(change_count(&operations), 0);
        prop_assert!(operations.len() <= 1);
    }

    #[test]
    fn prop_projections_round_trip(before in arb_text(), after in arb_text()) {
        let operations = diff(&before, &after);

        prop_assert_eq!(operations.iter().map(ChangeOp::before_text).collect::<String>(), before);
        prop_assert_eq!(operations.iter().map(ChangeOp::after_text).collect::<String>(), after);
    }

    #[test]
    fn prop_diff_is_deterministic(before in arb_text(), after in arb_text()) {
        prop_assert_eq!(diff(&before, &after), diff(&before, &after));
    }

    #[test]
    fn prop_segments_cover_tokens(before in arb_text(), after in arb_text()) {
        let old = word_tokenizer(&before);
        let new = word_tokenizer(&after);
        let segments = align(&old, &new);

        prop_assert!(segments.windows(2).all(|pair| pair[0].kind() != pair[1].kind()));

        let side = |excluded: SegmentKind| -> Vec<Token> {
            segments
                .iter()
                .filter(|segment| segment.kind() != excluded)
                .flat_map(|segment| segment.tokens().to_vec())
                .collect()
        };
        prop_assert_eq!(side(SegmentKind::Added), old);
        prop_assert_eq!(side(SegmentKind::Removed), new);
    }

    #[test]
    fn prop_partial_decisions_pick_each_side(
        before in arb_text(),
        after in arb_text(),
        accepted in prop::collection::vec(any::<bool>(), 16),
    ) {
        let operations = diff(&before, &after);
        let mut decisions = DecisionStore::new(change_count(&operations));
        let mut expected = String::new();
        let mut change = 0;

        for operation in &operations {
            if let ChangeOp::Change { before, after } = operation {
                let accept = accepted.get(change).copied().unwrap_or_default();
                let decision = if accept { Decision::Accept } else { Decision::Decline };
                decisions.set(ChangeId(change), decision).unwrap();
                expected.push_str(if accept { after } else { before });
                change += 1;
            } else {
                expected.push_str(operation.before_text());
            }
        }

        let outcome = compile_merge(&before, &operations, &decisions);
        prop_assert_eq!(outcome.merged, expected);
        prop_assert!(outcome.resolved);
    }
}

#[test]
fn test_segment_kinds() {
    assert_eq!(Segment::Equal(vec![]).kind(), SegmentKind::Equal);
    assert_eq!(Segment::Removed(vec![]).kind(), SegmentKind::Removed);
    assert_eq!(Segment::Added(vec![]).kind(), SegmentKind::Added);
}
