pub mod org;
pub mod resolve;
