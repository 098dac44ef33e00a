/// Splits `text` into its content and the whitespace run it ends with.
///
/// ```not_rust
/// "very \n" -> ("very", " \n")
/// ```
pub fn split_trailing_whitespace(text: &str) -> (&str, &str) {
    text.split_at(text.trim_end().len())
}
