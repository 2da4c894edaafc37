pub mod results;
pub mod roster;
