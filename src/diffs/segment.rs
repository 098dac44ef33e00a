#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenizer::token::Token;

/// A run of tokens produced by the aligner, tagged with which side(s) of the
/// diff it belongs to.
///
/// Adjacent segments of the same kind are always absorbed into one as the
/// alignment is produced, see [`Segment::absorb`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "tokens", rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Tokens present in both the old and the new sequence.
    Equal(Vec<Token>),

    /// Tokens only present in the old sequence.
    Removed(Vec<Token>),

    /// Tokens only present in the new sequence.
    Added(Vec<Token>),
}

/// The type of a [`Segment`] without its tokens.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Equal,
    Removed,
    Added,
}

impl Segment {
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        match self {
            Segment::Equal(tokens) | Segment::Removed(tokens) | Segment::Added(tokens) => tokens,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Equal(..) => SegmentKind::Equal,
            Segment::Removed(..) => SegmentKind::Removed,
            Segment::Added(..) => SegmentKind::Added,
        }
    }

    /// The concatenated text of the segment's tokens.
    #[must_use]
    pub fn text(&self) -> String { self.tokens().iter().map(Token::text).collect() }

    /// Appends the tokens of `other` to `self` if both are of the same kind.
    /// Otherwise, `other` is handed back untouched.
    pub fn absorb(&mut self, other: Segment) -> Option<Segment> {
        match (self, other) {
            (Segment::Equal(tokens), Segment::Equal(more))
            | (Segment::Removed(tokens), Segment::Removed(more))
            | (Segment::Added(tokens), Segment::Added(more)) => {
                tokens.extend(more);
                None
            }
            (_, other) => Some(other),
        }
    }
}

/// Pushes `segment` onto `segments`, absorbing it into the last segment when
/// they are of the same kind. Empty segments are dropped.
pub fn push_segment(segments: &mut Vec<Segment>, segment: Segment) {
    if segment.tokens().is_empty() {
        return;
    }

    let leftover = match segments.last_mut() {
        Some(last) => last.absorb(segment),
        None => Some(segment),
    };

    segments.extend(leftover);
}
