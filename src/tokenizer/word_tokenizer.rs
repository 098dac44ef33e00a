use super::token::Token;

/// Splits text on word boundaries, creating tokens of alternating words and
/// whitespace runs.
///
/// ## Example
///
/// ```not_rust
/// "Hi  there!" -> ["Hi", "  ", "there!"]
/// ```
#[must_use]
pub fn word_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_some_and(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            result.push(text[previous_boundary_index..i].into());
            previous_boundary_index = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if previous_boundary_index < text.len() {
        result.push(text[previous_boundary_index..].into());
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> { tokens.iter().map(Token::text).collect() }

    #[test_case("", &[]; "empty")]
    #[test_case("Hi there!", &["Hi", " ", "there!"]; "simple sentence")]
    #[test_case(" what? ", &[" ", "what?", " "]; "surrounding whitespace")]
    #[test_case(" hello, \nwhere  are you?", &[" ", "hello,", " \n", "where", "  ", "are", " ", "you?"]; "mixed whitespace runs")]
    #[test_case("\t\n ", &["\t\n "]; "whitespace only")]
    #[test_case("こんにちは 世界", &["こんにちは", " ", "世界"]; "non-ascii")]
    #[test_case("a\u{00a0}b", &["a", "\u{00a0}", "b"]; "non-breaking space")]
    fn test_word_tokenizer(text: &str, expected: &[&str]) {
        assert_eq!(texts(&word_tokenizer(text)), expected);
    }

    #[test]
    fn test_tokens_reconstruct_input() {
        let text = "  Dear Professor Smith,\n\n\tI am   interested. ";
        let tokens = word_tokenizer(text);

        assert_eq!(tokens.iter().map(Token::text).collect::<String>(), text);
        assert!(
            tokens
                .windows(2)
                .all(|pair| pair[0].is_whitespace() != pair[1].is_whitespace())
        );
    }
}
