pub mod arrivals;
pub mod races;
pub mod ranking;
pub mod roster;
