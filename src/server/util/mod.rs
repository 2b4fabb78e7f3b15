pub mod path;
pub mod representation;
