use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fields of an outgoing message that a proposal can touch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmailField {
    Recipient,
    Subject,
    Body,
}

impl EmailField {
    pub const ALL: [EmailField; 3] = [EmailField::Recipient, EmailField::Subject, EmailField::Body];
}

impl Display for EmailField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailField::Recipient => write!(f, "recipient"),
            EmailField::Subject => write!(f, "subject"),
            EmailField::Body => write!(f, "body"),
        }
    }
}
