mod change_op;
mod group_segments;

pub use change_op::ChangeOp;
pub use group_segments::group_segments;
use tracing::debug;

use crate::{
    diffs::lcs::align,
    tokenizer::{Tokenizer, word_tokenizer::word_tokenizer},
};

/// Compute the operations turning `before` into `after` at the granularity
/// of words.
///
/// Every [`ChangeOp::Change`] is an independently resolvable edit: accepting
/// all of them yields `after`, declining all of them yields `before`.
///
/// ```
/// use redline_text::{ChangeOp, diff};
///
/// let operations = diff("Dear Professor Smith,", "Dear Dr. Smith,");
/// assert_eq!(
///     operations,
///     vec![
///         ChangeOp::equal("Dear "),
///         ChangeOp::change("Professor", "Dr."),
///         ChangeOp::equal(" Smith,"),
///     ]
/// );
/// ```
#[must_use]
pub fn diff(before: &str, after: &str) -> Vec<ChangeOp> {
    diff_with_tokenizer(before, after, &word_tokenizer)
}

/// Same as [`diff`] but splits the texts with a custom `tokenizer`.
#[must_use]
pub fn diff_with_tokenizer(before: &str, after: &str, tokenizer: &Tokenizer) -> Vec<ChangeOp> {
    let before_tokens = tokenizer(before);
    let after_tokens = tokenizer(after);

    let operations = group_segments(align(&before_tokens, &after_tokens));

    debug!(
        before_tokens = before_tokens.len(),
        after_tokens = after_tokens.len(),
        changes = change_count(&operations),
        "computed diff"
    );

    operations
}

/// Number of [`ChangeOp::Change`] entries, i.e. the number of decisions a
/// review of `operations` needs.
#[must_use]
pub fn change_count(operations: &[ChangeOp]) -> usize {
    operations.iter().filter(|op| op.is_change()).count()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::tokenizer::token::Token;

    fn project(operations: &[ChangeOp]) -> (String, String) {
        (
            operations.iter().map(ChangeOp::before_text).collect(),
            operations.iter().map(ChangeOp::after_text).collect(),
        )
    }

    #[test]
    fn test_professor_example() {
        let operations = diff(
            "Dear Professor Smith, I am interested.",
            "Dear Dr. Smith, I am very interested.",
        );

        assert_eq!(
            operations,
            vec![
                ChangeOp::equal("Dear "),
                ChangeOp::change("Professor", "Dr."),
                ChangeOp::equal(" Smith, I am "),
                ChangeOp::change("", "very "),
                ChangeOp::equal("interested."),
            ]
        );
    }

    #[test_case("", ""; "both empty")]
    #[test_case("", "a@x.com"; "empty before")]
    #[test_case("a@x.com", ""; "empty after")]
    #[test_case("same text", "same text"; "identical")]
    #[test_case("Hello world", "Goodbye cruel world!"; "mixed")]
    #[test_case("  leading", "leading  "; "moved whitespace")]
    #[test_case("a b a b", "b a b a"; "repetitive")]
    fn test_projections_reconstruct_inputs(before: &str, after: &str) {
        let operations = diff(before, after);

        assert_eq!(project(&operations), (before.to_owned(), after.to_owned()));
    }

    #[test]
    fn test_identical_inputs_have_no_changes() {
        assert_eq!(diff("x y z", "x y z"), vec![ChangeOp::equal("x y z")]);
        assert_eq!(diff("", ""), vec![]);
    }

    #[test]
    fn test_one_empty_side_is_a_single_change() {
        assert_eq!(diff("", "a@x.com"), vec![ChangeOp::change("", "a@x.com")]);
        assert_eq!(diff("old subject", ""), vec![ChangeOp::change("old subject", "")]);
    }

    #[test]
    fn test_change_count() {
        assert_eq!(change_count(&diff("same", "same")), 0);
        assert_eq!(
            change_count(&diff(
                "Dear Professor Smith, I am interested.",
                "Dear Dr. Smith, I am very interested."
            )),
            2
        );
    }

    #[test]
    fn test_custom_tokenizer() {
        let line_tokenizer = |text: &str| -> Vec<Token> {
            text.split_inclusive('\n')
                .flat_map(|line| {
                    let (content, ending) = line.split_at(line.trim_end_matches('\n').len());
                    [content, ending]
                })
                .filter(|part| !part.is_empty())
                .map(Token::from)
                .collect()
        };

        let operations = diff_with_tokenizer("first\nsecond\n", "first\n2nd\n", &line_tokenizer);

        assert_eq!(
            operations,
            vec![
                ChangeOp::equal("first\n"),
                ChangeOp::change("second", "2nd"),
                ChangeOp::equal("\n"),
            ]
        );
    }
}
