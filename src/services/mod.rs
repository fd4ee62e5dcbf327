pub mod classifier;
pub mod recommendations;
pub mod submission;
pub mod summary;
