use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Proposed values for some or all of the tracked fields, delivered together
/// by an assistant.
///
/// ```
/// use redline_text::{EmailField, Proposal};
///
/// let proposal = Proposal::new()
///     .with(EmailField::Recipient, "a@x.com")
///     .with(EmailField::Subject, "Hello");
///
/// assert_eq!(proposal.get(&EmailField::Subject), Some("Hello"));
/// assert_eq!(proposal.get(&EmailField::Body), None);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal<F>
where
    F: Ord,
{
    values: BTreeMap<F, String>,
}

impl<F> Default for Proposal<F>
where
    F: Ord,
{
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<F> Proposal<F>
where
    F: Ord,
{
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with(mut self, field: F, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: &F) -> Option<&str> { self.values.get(field).map(String::as_str) }

    #[must_use]
    pub fn len(&self) -> usize { self.values.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &str)> {
        self.values.iter().map(|(field, value)| (field, value.as_str()))
    }
}

impl<F, V> FromIterator<(F, V)> for Proposal<F>
where
    F: Ord,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(field, value)| (field, value.into()))
                .collect(),
        }
    }
}
