mod controller;
mod email_field;
mod field_state;
mod proposal;

pub use controller::ReviewController;
pub use email_field::EmailField;
pub use field_state::{FieldState, FieldStatus};
pub use proposal::Proposal;
