use std::fmt::Debug;

use tracing::{debug, trace};

use super::{
    ChangeId, Decision, DecisionStore, Fragment, MergeOutcome, compile_merge, render_fragments,
};
use crate::{
    errors::ReviewError,
    operations::{ChangeOp, change_count, diff_with_tokenizer},
    tokenizer::{Tokenizer, word_tokenizer::word_tokenizer},
};

/// Callback receiving `(merged_text, all_resolved)` after every decision
/// change.
pub type MergeListener = dyn FnMut(&str, bool);

/// The diff of a single field between its current value (`before`) and a
/// proposed value (`after`), together with the user's decisions on each
/// change.
///
/// The operation list and the decisions are always rebuilt together: changing
/// the input texts through [`FieldReview::rebase`] resets every decision to
/// pending. Decisions are only changed through [`FieldReview::decide`] and
/// the bulk variants; each of them recompiles the merged text.
///
/// ```
/// use redline_text::{ChangeId, Decision, FieldReview};
///
/// let mut review = FieldReview::new("Hello world", "Hello brave new world");
/// assert_eq!(review.change_count(), 1);
///
/// let outcome = review.decide(ChangeId(0), Decision::Accept).unwrap();
/// assert_eq!(outcome.merged, "Hello brave new world");
/// assert!(outcome.resolved);
/// ```
pub struct FieldReview {
    before: String,
    after: String,
    operations: Vec<ChangeOp>,
    decisions: DecisionStore,
    outcome: MergeOutcome,
    tokenizer: Box<Tokenizer>,
    listener: Option<Box<MergeListener>>,
}

impl Debug for FieldReview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldReview")
            .field("before", &self.before)
            .field("after", &self.after)
            .field("operations", &self.operations)
            .field("decisions", &self.decisions)
            .field("outcome", &self.outcome)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl FieldReview {
    /// Diff `before` and `after` word by word with every change pending.
    #[must_use]
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self::with_tokenizer(before, after, Box::new(word_tokenizer))
    }

    #[must_use]
    pub fn with_tokenizer(
        before: impl Into<String>,
        after: impl Into<String>,
        tokenizer: Box<Tokenizer>,
    ) -> Self {
        let mut review = Self {
            before: before.into(),
            after: after.into(),
            operations: Vec::new(),
            decisions: DecisionStore::default(),
            outcome: MergeOutcome::default(),
            tokenizer,
            listener: None,
        };
        review.regenerate();

        review
    }

    /// Register the callback notified after every decision change. Replaces
    /// the previous listener.
    pub fn set_listener(&mut self, listener: Box<MergeListener>) { self.listener = Some(listener); }

    /// Replace the compared texts. When either differs from the current pair,
    /// the operations are recomputed and every decision is reset to pending.
    pub fn rebase(&mut self, before: impl Into<String>, after: impl Into<String>) -> &MergeOutcome {
        let (before, after) = (before.into(), after.into());
        if before != self.before || after != self.after {
            self.before = before;
            self.after = after;
            self.regenerate();
        }

        &self.outcome
    }

    /// Replace the compared texts and start the review over, even when the
    /// pair is unchanged. Every decision is reset to pending.
    pub fn reset(&mut self, before: impl Into<String>, after: impl Into<String>) -> &MergeOutcome {
        self.before = before.into();
        self.after = after.into();
        self.regenerate();

        &self.outcome
    }

    /// Record `decision` for `change` and return the recompiled outcome.
    ///
    /// # Errors
    ///
    /// `ReviewError::UnknownChange` if `change` is not a change of the current
    /// operation list.
    pub fn decide(
        &mut self,
        change: ChangeId,
        decision: Decision,
    ) -> Result<&MergeOutcome, ReviewError> {
        let previous = self.decisions.set(change, decision)?;
        trace!(%change, ?previous, ?decision, "decision recorded");

        if previous != decision {
            self.recompile();
        }

        Ok(&self.outcome)
    }

    /// Accept every change of the field.
    pub fn accept_all(&mut self) -> &MergeOutcome { self.decide_all(Decision::Accept) }

    /// Decline every change of the field.
    pub fn decline_all(&mut self) -> &MergeOutcome { self.decide_all(Decision::Decline) }

    fn decide_all(&mut self, decision: Decision) -> &MergeOutcome {
        self.decisions.set_all(decision);
        self.recompile();

        &self.outcome
    }

    fn regenerate(&mut self) {
        self.operations = diff_with_tokenizer(&self.before, &self.after, &*self.tokenizer);
        self.decisions = DecisionStore::new(change_count(&self.operations));
        self.outcome = compile_merge(&self.before, &self.operations, &self.decisions);

        debug!(changes = self.decisions.len(), "regenerated field review");
    }

    fn recompile(&mut self) {
        self.outcome = compile_merge(&self.before, &self.operations, &self.decisions);

        if let Some(listener) = self.listener.as_mut() {
            listener(&self.outcome.merged, self.outcome.resolved);
        }
    }

    #[must_use]
    pub fn before(&self) -> &str { &self.before }

    #[must_use]
    pub fn after(&self) -> &str { &self.after }

    #[must_use]
    pub fn operations(&self) -> &[ChangeOp] { &self.operations }

    /// The changes of the operation list with their ids, as
    /// `(id, before, after)`.
    pub fn changes(&self) -> impl Iterator<Item = (ChangeId, &str, &str)> + '_ {
        self.operations
            .iter()
            .filter_map(|op| match op {
                ChangeOp::Change { before, after } => Some((before.as_str(), after.as_str())),
                ChangeOp::Equal { .. } => None,
            })
            .enumerate()
            .map(|(index, (before, after))| (ChangeId(index), before, after))
    }

    #[must_use]
    pub fn change_count(&self) -> usize { self.decisions.len() }

    #[must_use]
    pub fn pending_count(&self) -> usize { self.decisions.pending_count() }

    #[must_use]
    pub fn decision(&self, change: ChangeId) -> Option<Decision> { self.decisions.get(change) }

    #[must_use]
    pub fn decisions(&self) -> &DecisionStore { &self.decisions }

    #[must_use]
    pub fn outcome(&self) -> &MergeOutcome { &self.outcome }

    #[must_use]
    pub fn merged_text(&self) -> &str { &self.outcome.merged }

    #[must_use]
    pub fn is_resolved(&self) -> bool { self.outcome.resolved }

    #[must_use]
    pub fn fragments(&self) -> Vec<Fragment> { render_fragments(&self.operations, &self.decisions) }
}
