mod decision;
mod field_review;
mod fragment;
mod merge_outcome;

pub use decision::{ChangeId, Decision, DecisionStore};
pub use field_review::{FieldReview, MergeListener};
pub use fragment::{Fragment, render_fragments, render_word_diff};
pub use merge_outcome::{MergeOutcome, compile_merge};
