pub mod analysis;
pub mod opportunity;
pub mod profile;
pub mod recommendation;
