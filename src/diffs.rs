pub mod lcs;
pub mod segment;
