pub mod clip;
pub mod rows;
pub mod segment;
