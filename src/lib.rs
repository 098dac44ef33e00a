//! Word-level diffing of a current text against a proposed one, where every
//! change can be accepted or declined on its own, and a controller reviewing
//! a proposal that touches several fields at once.

mod diffs;
mod errors;
mod operations;
mod reconciliation;
mod review;
mod tokenizer;
mod utils;

pub use diffs::{
    lcs::align,
    segment::{Segment, SegmentKind},
};
pub use errors::ReviewError;
pub use operations::{ChangeOp, change_count, diff, diff_with_tokenizer, group_segments};
pub use reconciliation::{EmailField, FieldState, FieldStatus, Proposal, ReviewController};
pub use review::{
    ChangeId, Decision, DecisionStore, FieldReview, Fragment, MergeListener, MergeOutcome,
    compile_merge, render_fragments, render_word_diff,
};
pub use tokenizer::{Tokenizer, token::Token, word_tokenizer::word_tokenizer};

#[cfg(feature = "wasm")]
pub mod wasm;
