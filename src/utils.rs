pub mod common_prefix_len;
pub mod string_builder;
pub mod trailing_whitespace;
