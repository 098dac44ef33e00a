use std::{collections::BTreeMap, fmt::Debug};

use tracing::{debug, info};

use super::{FieldState, FieldStatus, Proposal};
use crate::{
    errors::ReviewError,
    review::{ChangeId, Decision, FieldReview, MergeOutcome},
};

/// Coordinates the review of a proposal spanning several fields.
///
/// Each field that the proposal changes gets its own [`FieldReview`]; the
/// merged text of that review is written back to the field after every
/// decision. Once no field is pending anymore the proposal is discarded.
///
/// Field states are never updated in place: every transition builds the next
/// map of states and swaps it in as a whole, so fields resolving in the same
/// step can't leave a half-updated status behind.
///
/// ```
/// use redline_text::{ChangeId, Decision, EmailField, FieldStatus, Proposal, ReviewController};
///
/// let mut controller = ReviewController::new([
///     (EmailField::Recipient, ""),
///     (EmailField::Subject, "Meeting"),
/// ]);
///
/// controller
///     .receive(
///         Proposal::new()
///             .with(EmailField::Recipient, "a@x.com")
///             .with(EmailField::Subject, "Meeting"),
///     )
///     .unwrap();
/// assert_eq!(controller.status(&EmailField::Recipient), Some(FieldStatus::Pending));
/// assert_eq!(controller.status(&EmailField::Subject), Some(FieldStatus::Unchanged));
///
/// controller
///     .decide(&EmailField::Recipient, ChangeId(0), Decision::Accept)
///     .unwrap();
/// assert_eq!(controller.value(&EmailField::Recipient), Some("a@x.com"));
/// assert_eq!(controller.status(&EmailField::Recipient), Some(FieldStatus::Applied));
/// assert!(controller.proposal().is_none());
/// ```
#[derive(Debug)]
pub struct ReviewController<F>
where
    F: Ord + Clone + Debug,
{
    fields: BTreeMap<F, FieldState>,
    reviews: BTreeMap<F, FieldReview>,
    proposal: Option<Proposal<F>>,
}

impl<F> ReviewController<F>
where
    F: Ord + Clone + Debug,
{
    /// Track the given fields with their current values.
    pub fn new<I, V>(current_values: I) -> Self
    where
        I: IntoIterator<Item = (F, V)>,
        V: Into<String>,
    {
        Self {
            fields: current_values
                .into_iter()
                .map(|(field, value)| (field, FieldState::new(value)))
                .collect(),
            reviews: BTreeMap::new(),
            proposal: None,
        }
    }

    /// Start reviewing `proposal`, replacing any proposal under review.
    ///
    /// Fields whose proposed value differs from their current value become
    /// pending; the rest are unchanged. Fields missing from the proposal are
    /// unchanged and have no proposed value.
    ///
    /// # Errors
    ///
    /// `ReviewError::UnknownField` if the proposal names an untracked field.
    /// The controller is left untouched in that case.
    pub fn receive(&mut self, proposal: Proposal<F>) -> Result<(), ReviewError> {
        if let Some((field, _)) = proposal
            .iter()
            .find(|(field, _)| !self.fields.contains_key(*field))
        {
            return Err(ReviewError::UnknownField(format!("{field:?}")));
        }

        let mut next = BTreeMap::new();
        let mut reviews = BTreeMap::new();

        for (field, state) in &self.fields {
            let proposed = proposal.get(field).map(str::to_owned);

            let status = match &proposed {
                Some(proposed) if *proposed != state.current_value => {
                    reviews.insert(
                        field.clone(),
                        FieldReview::new(state.current_value.clone(), proposed.clone()),
                    );
                    FieldStatus::Pending
                }
                _ => FieldStatus::Unchanged,
            };

            next.insert(
                field.clone(),
                FieldState {
                    current_value: state.current_value.clone(),
                    proposed_value: proposed,
                    status,
                },
            );
        }

        info!(
            fields = proposal.len(),
            pending = reviews.len(),
            "received proposal"
        );

        self.reviews = reviews;
        self.proposal = Some(proposal);
        self.commit(next);

        Ok(())
    }

    /// Decide on a change of a pending field. The field's value becomes the
    /// merged text right away; once every change of the field is decided, the
    /// field is applied if it ended up equal to the proposed value and
    /// dismissed otherwise.
    ///
    /// # Errors
    ///
    /// - `ReviewError::NoActiveProposal` if nothing is under review,
    /// - `ReviewError::UnknownField` if `field` is not tracked,
    /// - `ReviewError::FieldNotPending` if `field` has nothing to review,
    /// - `ReviewError::UnknownChange` if `change` is out of range.
    pub fn decide(
        &mut self,
        field: &F,
        change: ChangeId,
        decision: Decision,
    ) -> Result<&FieldState, ReviewError> {
        let outcome = self.review_mut(field)?.decide(change, decision)?.clone();

        self.apply_outcome(field, outcome)
    }

    /// Accept every change of a single pending field.
    ///
    /// # Errors
    ///
    /// Same as [`ReviewController::decide`] except for `UnknownChange`.
    pub fn accept_field(&mut self, field: &F) -> Result<&FieldState, ReviewError> {
        let outcome = self.review_mut(field)?.accept_all().clone();

        self.apply_outcome(field, outcome)
    }

    /// Decline every change of a single pending field.
    ///
    /// # Errors
    ///
    /// Same as [`ReviewController::decide`] except for `UnknownChange`.
    pub fn decline_field(&mut self, field: &F) -> Result<&FieldState, ReviewError> {
        let outcome = self.review_mut(field)?.decline_all().clone();

        self.apply_outcome(field, outcome)
    }

    /// Take the proposed value of every field that has one and discard the
    /// proposal.
    ///
    /// # Errors
    ///
    /// `ReviewError::NoActiveProposal` if nothing is under review.
    pub fn accept_all(&mut self) -> Result<(), ReviewError> {
        self.resolve_all(|state| {
            if let Some(proposed) = &state.proposed_value {
                state.current_value.clone_from(proposed);
            }
            state.status = FieldStatus::Applied;
        })
    }

    /// Keep the current value of every field and discard the proposal.
    ///
    /// # Errors
    ///
    /// `ReviewError::NoActiveProposal` if nothing is under review.
    pub fn decline_all(&mut self) -> Result<(), ReviewError> {
        self.resolve_all(|state| state.status = FieldStatus::Dismissed)
    }

    /// Set the value of a field directly, e.g. when the user types into it.
    ///
    /// A pending field is diffed again against its proposed value and all of
    /// its decisions start over, even if the new value is the text the review
    /// started from. If the new value already equals the proposed value, the
    /// field is applied. Any other field drops its proposed value, so bulk
    /// operations keep what the user typed.
    ///
    /// # Errors
    ///
    /// `ReviewError::UnknownField` if `field` is not tracked.
    pub fn edit(&mut self, field: &F, value: impl Into<String>) -> Result<&FieldState, ReviewError> {
        let value = value.into();
        if !self.fields.contains_key(field) {
            return Err(ReviewError::UnknownField(format!("{field:?}")));
        }

        if let Some(review) = self.reviews.get_mut(field) {
            let proposed = review.after().to_owned();
            let outcome = review.reset(value, proposed).clone();
            return self.apply_outcome(field, outcome);
        }

        let mut next = self.fields.clone();
        if let Some(state) = next.get_mut(field) {
            state.current_value = value;
            state.proposed_value = None;
        }
        self.commit(next);

        self.state(field)
    }

    fn review_mut(&mut self, field: &F) -> Result<&mut FieldReview, ReviewError> {
        if self.proposal.is_none() {
            return Err(ReviewError::NoActiveProposal);
        }

        if !self.fields.contains_key(field) {
            return Err(ReviewError::UnknownField(format!("{field:?}")));
        }

        self.reviews
            .get_mut(field)
            .ok_or_else(|| ReviewError::FieldNotPending(format!("{field:?}")))
    }

    fn apply_outcome(
        &mut self,
        field: &F,
        outcome: MergeOutcome,
    ) -> Result<&FieldState, ReviewError> {
        let mut next = self.fields.clone();
        let state = next
            .get_mut(field)
            .ok_or_else(|| ReviewError::UnknownField(format!("{field:?}")))?;

        state.current_value = outcome.merged;

        if outcome.resolved {
            state.status = if state.proposed_value.as_ref() == Some(&state.current_value) {
                FieldStatus::Applied
            } else {
                FieldStatus::Dismissed
            };
            self.reviews.remove(field);

            debug!(?field, status = ?state.status, "field resolved");
        }

        self.commit(next);

        self.state(field)
    }

    fn resolve_all(&mut self, resolve: impl Fn(&mut FieldState)) -> Result<(), ReviewError> {
        if self.proposal.is_none() {
            return Err(ReviewError::NoActiveProposal);
        }

        let mut next = self.fields.clone();
        next.values_mut().for_each(resolve);
        self.reviews.clear();
        self.commit(next);

        Ok(())
    }

    /// Swap in the next field states and discard the proposal if no field is
    /// pending anymore.
    fn commit(&mut self, next: BTreeMap<F, FieldState>) {
        self.fields = next;

        if self.proposal.is_some() && !self.has_pending_fields() {
            self.proposal = None;
            self.reviews.clear();

            info!("every field is resolved, discarding proposal");
        }
    }

    fn state(&self, field: &F) -> Result<&FieldState, ReviewError> {
        self.fields
            .get(field)
            .ok_or_else(|| ReviewError::UnknownField(format!("{field:?}")))
    }

    #[must_use]
    pub fn field(&self, field: &F) -> Option<&FieldState> { self.fields.get(field) }

    #[must_use]
    pub fn value(&self, field: &F) -> Option<&str> {
        self.fields
            .get(field)
            .map(|state| state.current_value.as_str())
    }

    #[must_use]
    pub fn status(&self, field: &F) -> Option<FieldStatus> {
        self.fields.get(field).map(|state| state.status)
    }

    /// The diff of a pending field.
    #[must_use]
    pub fn review(&self, field: &F) -> Option<&FieldReview> { self.reviews.get(field) }

    /// The proposal under review, if any.
    #[must_use]
    pub fn proposal(&self) -> Option<&Proposal<F>> { self.proposal.as_ref() }

    #[must_use]
    pub fn has_pending_fields(&self) -> bool { self.fields.values().any(FieldState::is_pending) }

    pub fn pending_fields(&self) -> impl Iterator<Item = &F> {
        self.fields
            .iter()
            .filter(|(_, state)| state.is_pending())
            .map(|(field, _)| field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&F, &FieldState)> { self.fields.iter() }
}
