use std::str::Chars;

/// A helper for building a string in-order based on an original string and a
/// series of insertions, deletions, and copies applied to it. It is safe to use
/// with UTF-8 strings as all operations are based on character indices. The
/// methods must be called in-order.
#[derive(Debug)]
pub struct StringBuilder<'a> {
    original: Chars<'a>,
    buffer: String,
}

impl<'a> StringBuilder<'a> {
    pub fn new(original: &'a str) -> Self {
        StringBuilder {
            original: original.chars(),
            buffer: String::with_capacity(original.len()),
        }
    }

    /// Insert a string at the end of the built buffer.
    pub fn insert(&mut self, text: &str) { self.buffer.push_str(text); }

    /// Skip copying `length` characters from the original string to the built
    /// buffer.
    pub fn delete(&mut self, length: usize) {
        if length == 0 {
            return;
        }

        self.original.nth(length - 1);
    }

    /// Copy `length` characters from the original string to the built buffer.
    pub fn retain(&mut self, length: usize) {
        self.buffer.extend(self.original.by_ref().take(length));
    }

    /// Returns the built buffer. Any part of the original that hasn't been
    /// retained or deleted yet is dropped.
    pub fn build(self) -> String {
        debug_assert!(
            self.original.as_str().is_empty(),
            "The whole original text must be consumed before building, remaining: {:?}",
            self.original.as_str()
        );

        self.buffer
    }
}
